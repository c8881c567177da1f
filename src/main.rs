//! flakekit - snowflake G-code generator

use anyhow::{Context, Result};
use clap::Parser;
use flakekit::{init_logging, Config, ProgramWriter, SnowflakeGenerator};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "flakekit")]
#[command(version = flakekit::VERSION)]
#[command(about = "Generate layered six-fold snowflake G-code", long_about = None)]
struct Cli {
    /// Configuration file (.json or .toml); defaults to the user config file if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file, or "-" for stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Random seed for a reproducible snowflake
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u64).range(..=flakekit::MAX_SEED)
    )]
    seed: Option<u64>,

    /// Number of raised layers after the base pass
    #[arg(short, long)]
    layers: Option<u32>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.snowflake.seed = Some(seed);
        }
        if let Some(layers) = self.layers {
            config.snowflake.layer_count = layers;
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let mut config =
        Config::load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    info!(version = flakekit::VERSION, build = flakekit::BUILD_DATE, "Starting flakekit");

    let generator = SnowflakeGenerator::new(config.snowflake.clone())?;
    let flake = generator.generate()?;

    let path = &config.output.path;
    if path.as_os_str() == "-" {
        let mut writer = ProgramWriter::new(io::stdout().lock());
        writer.write_program(&flake.program)?;
        writer.finish()?;
    } else {
        let lines = flakekit::write_to_file(&flake.program, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), lines, spikes = flake.spike_count(), "Done");
    }

    Ok(())
}
