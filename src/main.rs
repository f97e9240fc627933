//! qa-brain - a single entrypoint for the QA starter repo
//!
//! Dispatches to environment checks (`doctor`), Playwright test packs
//! (`run`), and the LLM eval harness (`evals`), so nobody has to memorize
//! the underlying tool invocations.

use clap::Parser;
use commands::Commands;
use qa_brain::{cli, commands, common};

#[derive(Parser)]
#[command(name = "qa-brain", about = "QA Brain Starter CLI")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init_cli();

    let cli = Cli::parse();

    let code = match cli::dispatch(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    };

    std::process::exit(code);
}
