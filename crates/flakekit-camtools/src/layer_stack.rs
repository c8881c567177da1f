//! Layer stacking
//!
//! Turns one star into the full print program: the base pass, then each
//! raised layer wrapped in start/stop extrusion markers, then a lift-off move
//! and heater shutdown.

use crate::parameters::SnowflakeParameters;
use flakekit_core::{Marker, MotionCommand, Program, Toolpath};
use tracing::debug;

/// Stacks a star toolpath into layers
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStackBuilder {
    layer_count: u32,
    layer_thickness: f64,
    lift_clearance: f64,
}

impl LayerStackBuilder {
    /// Create a builder with the default 10 mm lift clearance
    pub fn new(layer_count: u32, layer_thickness: f64) -> Self {
        Self {
            layer_count,
            layer_thickness,
            lift_clearance: 10.0,
        }
    }

    /// Set the Z clearance of the final lift-off move
    pub fn with_lift_clearance(mut self, clearance: f64) -> Self {
        self.lift_clearance = clearance;
        self
    }

    /// Builder configured from snowflake parameters
    pub fn from_parameters(params: &SnowflakeParameters) -> Self {
        Self::new(params.layer_count, params.layer_thickness)
            .with_lift_clearance(params.lift_clearance)
    }

    /// Emit the program
    ///
    /// `lift_from` supplies the XY (and base Z) of the lift-off move; its Z is
    /// raised by the lift clearance. Layer `k` (1-based) sits `k` layer
    /// thicknesses above the base pass.
    pub fn build(&self, star: &Toolpath, lift_from: MotionCommand) -> Program {
        let mut program = Program::new();
        let mut layer = star.clone();

        program.push_toolpath(&layer);
        program.push_marker(Marker::StopExtrusion);

        for index in 1..=self.layer_count {
            layer.raise_z(self.layer_thickness);
            debug!(
                layer = index,
                z = ?layer.first().map(|c| c.z),
                "Emitting layer"
            );

            program.push_marker(Marker::StartExtrusion);
            program.push_toolpath(&layer);
            program.push_marker(Marker::StopExtrusion);
        }

        let mut lift = lift_from;
        lift.raise_z(self.lift_clearance);
        program.push_move(lift);
        program.push_marker(Marker::HeaterOff);

        program
    }
}
