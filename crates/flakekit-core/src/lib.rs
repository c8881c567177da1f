//! # FlakeKit Core
//!
//! Core types for FlakeKit.
//! Provides the geometric data model the generators build on:
//! - [`MotionCommand`]: a single `G1` move (XYZ position plus feed rate)
//! - [`Toolpath`]: an ordered, exclusively owned sequence of moves with
//!   in-place rotate/mirror/reverse/z-offset transforms
//! - [`Program`]: the emitted line sequence of moves and M-code markers
//! - Half-up rounding used by the textual G-code form

pub mod error;
pub mod motion;
pub mod program;
pub mod rounding;
pub mod toolpath;

pub use error::{GcodeError, Result};
pub use motion::MotionCommand;
pub use program::{Marker, Program, ProgramLine};
pub use rounding::{format_fixed, round_half_up, COORDINATE_DIGITS};
pub use toolpath::Toolpath;
