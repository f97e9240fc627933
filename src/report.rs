//! Status reporting helpers
//!
//! One line per fact, one glyph per severity. These are pure output
//! functions; nothing here keeps state between calls.

use std::path::Path;

use colored::Colorize;

/// Report a passing check
pub fn ok(label: &str) {
    println!("{} {}", "✓".green(), label);
}

/// Report a non-fatal problem
pub fn warn(label: &str) {
    println!("{} {}", "!".yellow(), label);
}

/// Report a failing check
pub fn fail(label: &str) {
    println!("{} {}", "✗".red(), label);
}

/// Print a pass/fail line for a project file and return whether it exists
pub fn check_file(root: &Path, rel_path: &str) -> bool {
    let exists = root.join(rel_path).exists();
    if exists {
        println!("  {} {}", "✓".green(), rel_path);
    } else {
        println!("  {} {}", "✗".red(), rel_path);
    }
    exists
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_check_file_reflects_existence() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();

        assert!(check_file(dir.path(), "package.json"));
        assert!(!check_file(dir.path(), "playwright.config.ts"));
    }

    #[test]
    fn test_check_file_nested_path() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".github/workflows")).unwrap();
        std::fs::write(dir.path().join(".github/workflows/qa.yml"), "name: qa").unwrap();

        assert!(check_file(dir.path(), ".github/workflows/qa.yml"));
    }
}
