//! Snowflake Maker
//!
//! Generates a layered six-armed snowflake: one randomized spiky arm, rotated
//! into a six-fold star, stacked into layers.

use crate::error::CamToolResult;
use crate::layer_stack::LayerStackBuilder;
use crate::parameters::SnowflakeParameters;
use crate::spiky_arm::{ArmGenerator, SpikyArm};
use crate::star::{assemble_star, final_orientation};
use flakekit_core::{Program, Toolpath};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Output of one generator run
#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    /// The base arm, in its original orientation
    pub arm: SpikyArm,
    /// Six rotated copies of the arm at the base layer height
    pub star: Toolpath,
    /// Complete print program
    pub program: Program,
}

impl Snowflake {
    /// Spikes on each half-arm
    pub fn spike_count(&self) -> u32 {
        self.arm.spike_count
    }

    /// The program as G-code text, one line per entry
    pub fn to_gcode(&self) -> String {
        self.program.to_string()
    }
}

/// Generator for snowflake G-code
#[derive(Debug, Clone)]
pub struct SnowflakeGenerator {
    params: SnowflakeParameters,
    arms: ArmGenerator,
}

impl SnowflakeGenerator {
    /// Create a new generator; parameters are validated here
    pub fn new(params: SnowflakeParameters) -> CamToolResult<Self> {
        let arms = ArmGenerator::new(params.clone())?;
        Ok(Self { params, arms })
    }

    /// The parameters this generator was built with
    pub fn parameters(&self) -> &SnowflakeParameters {
        &self.params
    }

    /// Generate using the configured seed, or OS entropy when none is set
    pub fn generate(&self) -> CamToolResult<Snowflake> {
        let mut rng = match self.params.seed {
            Some(seed) => {
                debug!(seed, "Seeding generator");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        self.generate_with_rng(&mut rng)
    }

    /// Generate, drawing every random value from `rng`
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> CamToolResult<Snowflake> {
        let arm = self.arms.generate(rng)?;
        let star = assemble_star(&arm.toolpath);

        let lift_from = final_orientation(arm.tip);
        let program = LayerStackBuilder::from_parameters(&self.params).build(&star, lift_from);

        info!(
            spikes = arm.spike_count,
            arm_commands = arm.toolpath.len(),
            star_commands = star.len(),
            layers = self.params.layer_count,
            lines = program.len(),
            "Snowflake generated"
        );

        Ok(Snowflake {
            arm,
            star,
            program,
        })
    }
}
