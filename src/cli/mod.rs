//! Command dispatch
//!
//! Wires the parsed clap command to its handler with the real resolver and
//! invoker, and hands the resulting exit code back to `main`.

use crate::commands::Commands;
use crate::common::{paths, Result};
use crate::exec::{PathResolver, ProcessInvoker};
use crate::{doctor, evals, packs};

/// Dispatch a command, returning the process exit code
pub async fn dispatch(command: Commands) -> Result<i32> {
    let root = paths::project_root()?;
    let resolver = PathResolver;
    let invoker = ProcessInvoker::new(&root);

    let code = match command {
        Commands::Doctor => doctor::run(&resolver, &invoker, &root).await,
        Commands::Run { pack } => packs::run(pack.name(), &invoker).await,
        Commands::Evals { min_score } => evals::run(min_score, &resolver, &invoker, &root).await,
    };

    Ok(code)
}
