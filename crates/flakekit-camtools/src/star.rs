//! Six-fold star assembly
//!
//! The star is six copies of one arm. Copy `k` (1-based) is the base arm
//! rotated by `-60° * k`, so the copies land at -60°, -120°, ... -360°. The
//! unrotated 0° orientation is only reached by the sixth copy.

use flakekit_core::{MotionCommand, Toolpath};

/// Arms per star.
pub const ARM_COUNT: usize = 6;

/// Angular step between consecutive arms (degrees, clockwise).
pub const ARM_STEP_DEGREES: f64 = -60.0;

/// Rotation applied to arm copy `k` (radians).
pub fn arm_rotation(k: usize) -> f64 {
    (ARM_STEP_DEGREES * k as f64).to_radians()
}

/// Build the star from an arm that is only borrowed, never modified
pub fn assemble_star(arm: &Toolpath) -> Toolpath {
    let mut star = Toolpath::with_capacity(arm.len() * ARM_COUNT);
    for k in 1..=ARM_COUNT {
        star.extend(&arm.rotated(arm_rotation(k)));
    }
    star
}

/// Where a point of the base arm ends up after the last star rotation
pub fn final_orientation(command: MotionCommand) -> MotionCommand {
    command.rotated(arm_rotation(ARM_COUNT))
}
