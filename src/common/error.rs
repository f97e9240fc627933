//! Error types for the qa-brain CLI
//!
//! Almost every failure this tool sees is either absorbed locally (a missing
//! tool becomes exit code 127, an unreadable manifest becomes an empty one)
//! or forwarded verbatim as the child's exit code. Only conditions that make
//! an invocation impossible to even attempt surface through this type.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the qa-brain CLI
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to determine project root: {0}")]
    ProjectRoot(#[source] io::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
