//! Snowflake generation parameters

use crate::error::{ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};

/// Most spikes allowed on one half-arm
pub const MAX_SPIKES: u32 = 1000;

/// Largest seed that survives a TOML round trip (TOML integers are `i64`)
pub const MAX_SEED: u64 = i64::MAX as u64;

/// Parameters for the snowflake generator
///
/// Defaults reproduce the classic 20 mm, seven-layer flake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowflakeParameters {
    /// Length of one arm along its axis (mm)
    pub arm_length: f64,
    /// Width of the arm's baseline (mm)
    pub arm_thickness: f64,
    /// Fewest spikes per half-arm (inclusive)
    pub min_spikes: u32,
    /// Most spikes per half-arm (inclusive)
    pub max_spikes: u32,
    /// Offset added to every spike's base and tip X (mm)
    pub spacer: f64,
    /// Angle between a spike and the arm axis (degrees)
    pub spike_angle_deg: f64,
    /// How far the pointed tip extends beyond the arm, as a fraction of arm length
    pub tip_extension: f64,
    /// Feed rate for every move (mm/min)
    pub feed_rate: u32,
    /// Z of the first layer (mm)
    pub initial_z: f64,
    /// Number of raised layers printed after the base pass
    pub layer_count: u32,
    /// Z increment between layers (mm)
    pub layer_thickness: f64,
    /// Z clearance of the final lift-off move above `initial_z` (mm)
    pub lift_clearance: f64,
    /// Random seed; `None` draws one from the OS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SnowflakeParameters {
    fn default() -> Self {
        Self {
            arm_length: 20.0,
            arm_thickness: 1.0,
            min_spikes: 2,
            max_spikes: 5,
            spacer: 0.5,
            spike_angle_deg: 30.0,
            tip_extension: 0.1,
            feed_rate: 1500,
            initial_z: 1.11,
            layer_count: 7,
            layer_thickness: 0.35,
            lift_clearance: 10.0,
            seed: None,
        }
    }
}

impl SnowflakeParameters {
    /// Spike angle in radians
    pub fn spike_angle(&self) -> f64 {
        self.spike_angle_deg.to_radians()
    }

    /// X of the pointed tip between the two arm halves
    pub fn tip_x(&self) -> f64 {
        self.arm_length + self.arm_length * self.tip_extension
    }

    /// Upper bound on `|x| + |y|` of any arm point
    ///
    /// Rotation never moves a point further from the origin than this sum.
    pub fn reach(&self) -> f64 {
        2.0 * self.spacer + 1.5 * self.arm_length + self.tip_x() + self.half_thickness()
    }

    /// Upper bound on `|z|` of any emitted move, the lift-off included
    pub fn z_extent(&self) -> f64 {
        self.initial_z.abs() + self.layer_count as f64 * self.layer_thickness + self.lift_clearance
    }

    /// Baseline Y of the upper arm edge
    pub fn half_thickness(&self) -> f64 {
        self.arm_thickness / 2.0
    }

    /// Check every parameter, failing on the first invalid one.
    ///
    /// Nothing is clamped: an out-of-range value is always an error.
    pub fn validate(&self) -> ParameterResult<()> {
        require_positive("arm_length", self.arm_length)?;
        require_positive("arm_thickness", self.arm_thickness)?;

        if self.min_spikes < 1 {
            return Err(ParameterError::OutOfRange {
                name: "min_spikes".to_string(),
                value: self.min_spikes as f64,
                range: ">= 1".to_string(),
            });
        }
        if self.max_spikes > MAX_SPIKES {
            return Err(ParameterError::OutOfRange {
                name: "max_spikes".to_string(),
                value: self.max_spikes as f64,
                range: format!("1..={}", MAX_SPIKES),
            });
        }
        if self.min_spikes > self.max_spikes {
            return Err(ParameterError::Incompatible(format!(
                "min_spikes ({}) must not exceed max_spikes ({})",
                self.min_spikes, self.max_spikes
            )));
        }

        require_non_negative("spacer", self.spacer)?;
        require_in_range("spike_angle_deg", self.spike_angle_deg, 0.0, 90.0)?;
        require_non_negative("tip_extension", self.tip_extension)?;
        require_finite("initial_z", self.initial_z)?;
        require_non_negative("layer_thickness", self.layer_thickness)?;
        require_non_negative("lift_clearance", self.lift_clearance)?;

        require_representable("tip_x", self.tip_x())?;
        require_representable("arm reach", self.reach())?;
        require_representable("z extent", self.z_extent())?;

        if let Some(seed) = self.seed {
            if seed > MAX_SEED {
                return Err(ParameterError::OutOfRange {
                    name: "seed".to_string(),
                    value: seed as f64,
                    range: format!("0..={}", MAX_SEED),
                });
            }
        }

        Ok(())
    }
}

fn require_finite(name: &str, value: f64) -> ParameterResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: format!("must be a finite number, got {}", value),
        })
    }
}

fn require_representable(name: &str, derived: f64) -> ParameterResult<()> {
    if derived.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: "derived coordinates overflow".to_string(),
        })
    }
}

fn require_positive(name: &str, value: f64) -> ParameterResult<()> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(out_of_range(name, value, "> 0"))
    }
}

fn require_non_negative(name: &str, value: f64) -> ParameterResult<()> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(out_of_range(name, value, ">= 0"))
    }
}

fn require_in_range(name: &str, value: f64, min: f64, max: f64) -> ParameterResult<()> {
    require_finite(name, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(out_of_range(name, value, &format!("{}..={}", min, max)))
    }
}

fn out_of_range(name: &str, value: f64, range: &str) -> ParameterError {
    ParameterError::OutOfRange {
        name: name.to_string(),
        value,
        range: range.to_string(),
    }
}
