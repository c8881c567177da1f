//! Spiky arm generator
//!
//! Builds one randomized blade of the snowflake. The upper half runs from the
//! arm root out along `y = thickness / 2`, raising a triangular spike at each
//! evenly spaced gap. The lower half is the same path mirrored across the X
//! axis and reversed, so the full arm is a single stroke: out along the top
//! edge, around the pointed tip, and back along the bottom edge.

use crate::error::{CamToolResult, ParameterError};
use crate::parameters::{SnowflakeParameters, MAX_SPIKES};
use flakekit_core::{MotionCommand, Toolpath};
use rand::Rng;
use tracing::debug;

/// A finished arm
#[derive(Debug, Clone, PartialEq)]
pub struct SpikyArm {
    /// Full stroke: half-arm, tip, mirrored half-arm
    pub toolpath: Toolpath,
    /// Commands in each half
    pub half_len: usize,
    /// Number of spikes on each half
    pub spike_count: u32,
    /// The pointed tip between the two halves
    pub tip: MotionCommand,
}

/// Generator for a single spiky arm
#[derive(Debug, Clone)]
pub struct ArmGenerator {
    params: SnowflakeParameters,
}

impl ArmGenerator {
    /// Create a generator, validating the parameters up front
    pub fn new(params: SnowflakeParameters) -> CamToolResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Draw the spike count uniformly from `min_spikes..=max_spikes`
    pub fn resolve_spike_count<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.params.min_spikes..=self.params.max_spikes)
    }

    fn point(&self, x: f64, y: f64) -> MotionCommand {
        MotionCommand::new(x, y, self.params.initial_z, self.params.feed_rate)
    }

    /// Build the upper half of an arm with `spike_count` spikes
    ///
    /// Produces `1 + 3 * spike_count + 1` commands: the root point, a
    /// base/tip/return triple per spike, and the closing point at the arm end.
    pub fn half_arm<R: Rng + ?Sized>(
        &self,
        spike_count: u32,
        rng: &mut R,
    ) -> CamToolResult<Toolpath> {
        if !(1..=MAX_SPIKES).contains(&spike_count) {
            return Err(ParameterError::OutOfRange {
                name: "num_spikes".to_string(),
                value: spike_count as f64,
                range: format!(
                    "1..={} (drawn from {}..={})",
                    MAX_SPIKES, self.params.min_spikes, self.params.max_spikes
                ),
            }
            .into());
        }

        let p = &self.params;
        let baseline = p.half_thickness();
        let gap_size = (p.arm_length / spike_count as f64) / 2.0;
        let (sin, cos) = p.spike_angle().sin_cos();

        let mut half = Toolpath::with_capacity(3 * spike_count as usize + 2);
        half.append(self.point(p.arm_thickness, baseline));

        for spike in 0..spike_count {
            let spike_length = rng.gen_range(0.0..p.arm_length / 2.0);

            let base_x = p.spacer + gap_size * (2 * spike) as f64;
            let tip_x = p.spacer + base_x + spike_length * cos;
            let tip_y = spike_length * sin;
            let return_x = p.spacer + base_x + gap_size;

            debug!(spike, spike_length, base_x, tip_x, tip_y, "Adding spike");

            half.append(self.point(base_x, baseline));
            half.append(self.point(tip_x, tip_y));
            half.append(self.point(return_x, baseline));
        }

        half.append(self.point(p.arm_length, baseline));
        Ok(half)
    }

    /// Join a half-arm, the pointed tip and the mirrored return half
    pub fn assemble(&self, half: &Toolpath) -> (Toolpath, MotionCommand) {
        let mut other_half = half.clone();
        other_half.mirror_across_x_axis();
        other_half.reverse_order();

        let tip = self.point(self.params.tip_x(), 0.0);

        let mut arm = Toolpath::with_capacity(half.len() * 2 + 1);
        arm.extend(half);
        arm.append(tip);
        arm.extend(&other_half);
        (arm, tip)
    }

    /// Generate a complete arm, drawing the spike count and lengths from `rng`
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> CamToolResult<SpikyArm> {
        let spike_count = self.resolve_spike_count(rng);
        let half = self.half_arm(spike_count, rng)?;
        let (toolpath, tip) = self.assemble(&half);

        debug!(
            spike_count,
            commands = toolpath.len(),
            length_mm = toolpath.total_length(),
            "Spiky arm generated"
        );

        Ok(SpikyArm {
            toolpath,
            half_len: half.len(),
            spike_count,
            tip,
        })
    }
}
