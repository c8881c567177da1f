//! # FlakeKit CAM Tools
//!
//! Procedural toolpath generation for six-fold snowflakes.
//!
//! ## Pipeline
//!
//! - **Spiky Arm**: one randomized blade, mirrored into a single continuous stroke
//! - **Star**: six rotated copies of the arm
//! - **Layer Stack**: the star repeated at increasing Z with extrusion markers
//! - **Snowflake Maker**: runs the three stages from validated parameters
//!
//! ## Supporting Infrastructure
//!
//! - **Parameters**: serializable configuration with up-front validation
//! - **Writer**: line-by-line program output to any `io::Write` or a file

pub mod error;
pub mod layer_stack;
pub mod parameters;
pub mod snowflake;
pub mod spiky_arm;
pub mod star;
pub mod writer;

// Re-export commonly used items
pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use layer_stack::LayerStackBuilder;
pub use parameters::{SnowflakeParameters, MAX_SEED, MAX_SPIKES};
pub use snowflake::{Snowflake, SnowflakeGenerator};
pub use spiky_arm::{ArmGenerator, SpikyArm};
pub use star::{arm_rotation, assemble_star, ARM_COUNT};
pub use writer::{write_to_file, ProgramWriter, DEFAULT_OUTPUT_FILE};
