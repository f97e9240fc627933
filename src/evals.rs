//! LLM eval harness runner
//!
//! Prefers a project-declared `evals` npm script; falls back to running the
//! harness entry file directly through ts-node. Either way the minimum score
//! is forwarded verbatim; the harness owns threshold semantics.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::exec::{Invocation, Invoker, ToolResolver, NOT_FOUND_CODE};
use crate::report;

/// Harness entry file used on the fallback path
const HARNESS_ENTRY: &str = "llm-evals/run_eval.ts";

/// The slice of package.json we consult
#[derive(Debug, Deserialize, Default)]
struct PackageManifest {
    #[serde(default)]
    scripts: HashMap<String, String>,
}

impl PackageManifest {
    /// Best-effort load; any read or parse failure yields the empty manifest
    ///
    /// Absence of a manifest is not an error here, it just routes evals to
    /// the fallback path. The parse error is discarded on purpose.
    fn load(root: &Path) -> Self {
        let path = root.join("package.json");
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no readable package.json");
                return Self::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::debug!(path = %path.display(), error = %e, "package.json did not parse");
            Self::default()
        })
    }

    fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }
}

/// Run the eval harness, preferring the npm script path
pub async fn run(
    min_score: f64,
    resolver: &dyn ToolResolver,
    invoker: &dyn Invoker,
    root: &Path,
) -> i32 {
    let manifest = PackageManifest::load(root);
    let score = min_score.to_string();

    if manifest.has_script("evals") {
        let invocation =
            Invocation::new("npm", ["run", "evals", "--", "--min-score", score.as_str()]);
        return invoker.invoke(&invocation).await;
    }

    // Fallback: call ts-node directly (requires dev deps installed)
    if resolver.resolve("npx").is_none() {
        report::fail("npx not found; cannot run TypeScript harness");
        return NOT_FOUND_CODE;
    }

    let invocation = Invocation::new(
        "npx",
        ["ts-node", HARNESS_ENTRY, "--min-score", score.as_str()],
    );
    invoker.invoke(&invocation).await
}
