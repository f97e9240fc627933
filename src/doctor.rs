//! Environment readiness checks
//!
//! Probes the tools, files, and env vars the QA starter repo needs and
//! folds everything into one pass/fail verdict. Tool and file checks gate
//! the verdict; env vars and the optional eval harness are hints only.

use std::path::Path;

use crate::exec::{Invocation, Invoker, ToolResolver};
use crate::report;

/// Files that must exist for the verdict to pass
const REQUIRED_FILES: &[&str] = &[
    "package.json",
    "playwright.config.ts",
    "examples/ui/login.spec.ts",
    "examples/api/healthcheck.spec.ts",
    ".github/workflows/qa.yml",
];

/// Optional LLM eval harness files, reported but never fatal
const HARNESS_FILES: &[&str] = &["llm-evals/golden.yaml", "llm-evals/run_eval.ts"];

/// Env vars the test suites read; absence is only a hint
const ENV_HINTS: &[&str] = &["APP_BASE_URL", "API_BASE_URL", "E2E_USER", "E2E_PASS"];

/// Report whether a tool resolves on PATH
fn probe_tool(resolver: &dyn ToolResolver, name: &str) -> bool {
    match resolver.resolve(name) {
        Some(path) => {
            report::ok(&format!("{} found at {}", name, path.display()));
            true
        }
        None => {
            report::fail(&format!("{name} not found in PATH"));
            false
        }
    }
}

/// Run all readiness checks; exit code 0 when the environment is ready
pub async fn run(resolver: &dyn ToolResolver, invoker: &dyn Invoker, root: &Path) -> i32 {
    println!("🩺 qa-brain doctor - environment sanity checks\n");

    // Required commands
    let node = probe_tool(resolver, "node");
    let npm = probe_tool(resolver, "npm");
    let npx = probe_tool(resolver, "npx");

    // Playwright runner (installed via NPM). Without npx there is nothing
    // to invoke; the check is skipped and counts as unavailable.
    let mut has_playwright = false;
    if npx {
        let probe = Invocation::new("npx", ["playwright", "--version"]);
        has_playwright = invoker.invoke(&probe).await == 0;
        if has_playwright {
            report::ok("Playwright available via npx");
        } else {
            report::warn("Playwright not detected - run: npx playwright install --with-deps");
        }
    }

    println!("\n📁 Required files:");
    // Non-short-circuiting so every file gets its line
    let files_ok = REQUIRED_FILES
        .iter()
        .fold(true, |acc, f| report::check_file(root, f) & acc);

    println!("\n🧪 Optional LLM eval harness:");
    let harness_present = HARNESS_FILES
        .iter()
        .fold(true, |acc, f| report::check_file(root, f) & acc);
    if harness_present {
        report::ok("LLM eval harness present");
    } else {
        report::warn("LLM eval harness not found (optional)");
    }

    println!("\n🔐 Environment variables (non-fatal hints):");
    for var in ENV_HINTS {
        if std::env::var_os(var).is_some_and(|v| !v.is_empty()) {
            report::ok(&format!("{var} set"));
        } else {
            report::warn(&format!("{var} not set"));
        }
    }

    println!("\n-- Doctor summary --");
    if !(node && npm && npx && has_playwright && files_ok) {
        report::fail("Environment not fully ready");
        return 1;
    }
    report::ok("Environment looks good");
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::mock::{RecordingInvoker, StaticResolver};
    use std::path::Path;
    use tempfile::tempdir;

    fn seed_required_files(root: &Path) {
        for rel in REQUIRED_FILES {
            let path = root.join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, "x").unwrap();
        }
    }

    #[tokio::test]
    async fn test_ready_environment_passes() {
        let dir = tempdir().unwrap();
        seed_required_files(dir.path());

        let resolver = StaticResolver::with_tools(&["node", "npm", "npx"]);
        let invoker = RecordingInvoker::succeeding();
        let code = run(&resolver, &invoker, dir.path()).await;

        assert_eq!(code, 0);
        assert_eq!(
            invoker.recorded(),
            vec![Invocation::new("npx", ["playwright", "--version"])]
        );
    }

    #[tokio::test]
    async fn test_missing_npx_skips_playwright_probe() {
        let dir = tempdir().unwrap();
        seed_required_files(dir.path());

        let resolver = StaticResolver::with_tools(&["node", "npm"]);
        let invoker = RecordingInvoker::succeeding();
        let code = run(&resolver, &invoker, dir.path()).await;

        assert_eq!(code, 1);
        assert!(invoker.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_failing_playwright_probe_flips_verdict() {
        let dir = tempdir().unwrap();
        seed_required_files(dir.path());

        let resolver = StaticResolver::with_tools(&["node", "npm", "npx"]);
        let invoker = RecordingInvoker::succeeding().with_code("npx", 1);
        let code = run(&resolver, &invoker, dir.path()).await;

        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn test_missing_required_file_flips_verdict() {
        let dir = tempdir().unwrap();
        seed_required_files(dir.path());
        std::fs::remove_file(dir.path().join("playwright.config.ts")).unwrap();

        let resolver = StaticResolver::with_tools(&["node", "npm", "npx"]);
        let invoker = RecordingInvoker::succeeding();
        let code = run(&resolver, &invoker, dir.path()).await;

        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn test_missing_optional_harness_stays_ready() {
        let dir = tempdir().unwrap();
        seed_required_files(dir.path());
        // No llm-evals/ files at all

        let resolver = StaticResolver::with_tools(&["node", "npm", "npx"]);
        let invoker = RecordingInvoker::succeeding();
        let code = run(&resolver, &invoker, dir.path()).await;

        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_no_tools_at_all_fails() {
        let dir = tempdir().unwrap();

        let resolver = StaticResolver::empty();
        let invoker = RecordingInvoker::succeeding();
        let code = run(&resolver, &invoker, dir.path()).await;

        assert_eq!(code, 1);
        assert!(invoker.recorded().is_empty());
    }
}
