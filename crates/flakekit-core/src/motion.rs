//! Single linear move (`G1`) with position and feed rate

use crate::error::{GcodeError, Result};
use crate::rounding::{format_fixed, COORDINATE_DIGITS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One instructed tool position plus feed rate
///
/// Coordinates are millimeters, feed rate is mm/min. The feed rate is
/// unsigned, so it can never go negative. Commands have no identity beyond
/// their value and are freely copied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionCommand {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
    /// Z-axis position
    pub z: f64,
    /// Feed rate in mm/min
    pub feed_rate: u32,
}

impl MotionCommand {
    /// Create a new motion command
    pub fn new(x: f64, y: f64, z: f64, feed_rate: u32) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite() && z.is_finite(),
            "MotionCommand axes must be finite: x={x}, y={y}, z={z}"
        );
        Self { x, y, z, feed_rate }
    }

    /// Rotate the XY position about the origin by `theta` radians (counter-clockwise)
    ///
    /// Z and feed rate are left untouched.
    pub fn rotate(&mut self, theta: f64) {
        let (sin, cos) = theta.sin_cos();
        let old_x = self.x;
        let old_y = self.y;
        self.x = old_x * cos - old_y * sin;
        self.y = old_x * sin + old_y * cos;
    }

    /// Rotated copy of this command
    pub fn rotated(mut self, theta: f64) -> Self {
        self.rotate(theta);
        self
    }

    /// Relative XY move
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Offset Z by `delta`
    pub fn raise_z(&mut self, delta: f64) {
        self.z += delta;
    }

    /// Reflect across the X axis
    pub fn mirror_x(&mut self) {
        self.y = -self.y;
    }

    /// Planar distance to another command
    pub fn distance_xy(&self, other: &MotionCommand) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl fmt::Display for MotionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "G1 X{} Y{} Z{} F{}",
            format_fixed(self.x, COORDINATE_DIGITS),
            format_fixed(self.y, COORDINATE_DIGITS),
            format_fixed(self.z, COORDINATE_DIGITS),
            self.feed_rate
        )
    }
}

impl FromStr for MotionCommand {
    type Err = GcodeError;

    /// Parse a `G1 X.. Y.. Z.. F..` line; all four words are required
    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let code = words.next().ok_or(GcodeError::EmptyLine)?;
        if code != "G1" {
            return Err(GcodeError::UnknownCode {
                code: code.to_string(),
            });
        }

        let (mut x, mut y, mut z, mut feed) = (None, None, None, None);
        for word in words {
            let mut chars = word.chars();
            let Some(letter) = chars.next() else {
                continue;
            };
            let value = chars.as_str();
            match letter {
                'X' => x = Some(parse_axis('X', value)?),
                'Y' => y = Some(parse_axis('Y', value)?),
                'Z' => z = Some(parse_axis('Z', value)?),
                'F' => {
                    feed = Some(value.parse::<u32>().map_err(|e| {
                        GcodeError::InvalidParameter {
                            param: 'F',
                            reason: e.to_string(),
                        }
                    })?)
                }
                other => {
                    return Err(GcodeError::InvalidParameter {
                        param: other,
                        reason: "unexpected word".to_string(),
                    })
                }
            }
        }

        Ok(Self {
            x: x.ok_or(GcodeError::MissingParameter { param: 'X' })?,
            y: y.ok_or(GcodeError::MissingParameter { param: 'Y' })?,
            z: z.ok_or(GcodeError::MissingParameter { param: 'Z' })?,
            feed_rate: feed.ok_or(GcodeError::MissingParameter { param: 'F' })?,
        })
    }
}

fn parse_axis(param: char, value: &str) -> Result<f64> {
    let parsed = value
        .parse::<f64>()
        .map_err(|e| GcodeError::InvalidParameter {
            param,
            reason: e.to_string(),
        })?;
    if !parsed.is_finite() {
        return Err(GcodeError::InvalidParameter {
            param,
            reason: "value must be finite".to_string(),
        });
    }
    Ok(parsed)
}
