//! Project root resolution
//!
//! Every external invocation and file check is anchored at the project root.
//! `QA_BRAIN_ROOT` overrides it; otherwise the current working directory is
//! the root, which matches running `qa-brain` from a checkout.

use std::path::PathBuf;

use super::{Error, Result};

/// Environment variable overriding the project root
pub const ROOT_ENV: &str = "QA_BRAIN_ROOT";

/// Resolve the project root for this invocation
pub fn project_root() -> Result<PathBuf> {
    if let Some(root) = std::env::var_os(ROOT_ENV) {
        return Ok(PathBuf::from(root));
    }
    std::env::current_dir().map_err(Error::ProjectRoot)
}
