//! CLI command definitions
//!
//! Defines the clap commands for the qa-brain CLI.

use clap::Subcommand;

use crate::packs::Pack;

#[derive(Subcommand)]
pub enum Commands {
    /// Run environment sanity checks
    Doctor,

    /// Run test packs via Playwright
    Run {
        /// Which pack to run
        #[arg(long, value_enum, default_value = "smoke")]
        pack: Pack,
    },

    /// Run the LLM eval harness
    Evals {
        /// Minimum passing score
        #[arg(long, default_value_t = 0.95)]
        min_score: f64,
    },
}
