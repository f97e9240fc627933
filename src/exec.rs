//! External process invocation and PATH lookup
//!
//! Everything qa-brain does ends in running somebody else's tool. The
//! [`Invoker`] and [`ToolResolver`] traits keep that edge injectable so the
//! decision logic can be tested without spawning anything.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use colored::Colorize;

use crate::report;

/// Exit code reported when an executable cannot be located or started
pub const NOT_FOUND_CODE: i32 = 127;

/// A fully-described external invocation: program plus ordered arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Render as a single shell-style line for echoing
    pub fn rendered(&self) -> String {
        if self.args.is_empty() {
            return self.program.clone();
        }
        format!("{} {}", self.program, self.args.join(" "))
    }
}

/// Runs an invocation to completion and reports its exit code
///
/// Implementations must absorb "executable not found" into
/// [`NOT_FOUND_CODE`] rather than raising; every other exit code passes
/// through untouched.
#[async_trait]
pub trait Invoker: Send + Sync {
    async fn invoke(&self, invocation: &Invocation) -> i32;
}

/// Locates an installed tool by name, tolerating absence
pub trait ToolResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// Real PATH lookup via the `which` crate
pub struct PathResolver;

impl ToolResolver for PathResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Spawns child processes in the project root with inherited stdio
///
/// The child writes straight to our terminal; nothing is captured. The call
/// blocks until the child exits, with no timeout (a hung tool hangs us).
pub struct ProcessInvoker {
    root: PathBuf,
}

impl ProcessInvoker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl Invoker for ProcessInvoker {
    async fn invoke(&self, invocation: &Invocation) -> i32 {
        println!("{} {}", "➤".cyan(), invocation.rendered());

        let status = tokio::process::Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&self.root)
            .status()
            .await;

        match status {
            // Signal death has no exit code; report plain failure
            Ok(status) => status.code().unwrap_or(1),
            Err(e) => {
                tracing::debug!(program = %invocation.program, error = %e, "spawn failed");
                report::fail(&format!("Command not found: {}", invocation.program));
                NOT_FOUND_CODE
            }
        }
    }
}
