//! qa-brain - a single entrypoint for the QA starter repo
//!
//! Wraps the external tooling (Playwright, npm, the LLM eval harness) behind
//! three subcommands: `doctor`, `run`, and `evals`.

pub mod cli;
pub mod commands;
pub mod common;
pub mod doctor;
pub mod evals;
pub mod exec;
pub mod packs;
pub mod report;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use exec::{Invocation, Invoker, PathResolver, ProcessInvoker, ToolResolver};
