//! # FlakeKit
//!
//! Procedural G-code generator for layered six-fold snowflakes.
//!
//! ## Architecture
//!
//! FlakeKit is organized as a workspace with multiple crates:
//!
//! 1. **flakekit-core** - Motion commands, toolpaths, program lines, rounding
//! 2. **flakekit-camtools** - Arm, star and layer generation, program writer
//! 3. **flakekit-settings** - JSON/TOML configuration files
//! 4. **flakekit** - Command-line binary that integrates all crates

pub use flakekit_core::{
    format_fixed, round_half_up, GcodeError, Marker, MotionCommand, Program, ProgramLine,
    Toolpath, COORDINATE_DIGITS,
};

pub use flakekit_camtools::{
    assemble_star, write_to_file, ArmGenerator, CamToolError, CamToolResult, LayerStackBuilder,
    ParameterError, ProgramWriter, Snowflake, SnowflakeGenerator, SnowflakeParameters, SpikyArm,
    ARM_COUNT, DEFAULT_OUTPUT_FILE, MAX_SEED, MAX_SPIKES,
};

pub use flakekit_settings::{Config, OutputSettings, SettingsError, SettingsResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout free for G-code
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
