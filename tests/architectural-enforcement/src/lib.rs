//! Architectural Enforcement Integration Tests
//!
//! Source-scanning tests for rules the compiler can't check:
//! - Timers are created in exactly one place (`orchestrator/core/src/timer.rs`)
//! - Nothing blocks a thread with `std::thread::sleep`
//! - The core crate stays free of terminal dependencies
//!
//! The helpers here are shared by the tests under `tests/`.

use std::fs;
use std::path::{Path, PathBuf};

/// A source line that broke a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File, relative to the workspace root
    pub path: PathBuf,
    /// 1-based line number
    pub line: usize,
    /// The offending line, trimmed
    pub text: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} - {}", self.path.display(), self.line, self.text)
    }
}

/// Workspace root (two levels above this crate)
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .canonicalize()
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("../.."))
}

/// Every `.rs` file under `dir` (relative to the workspace root)
pub fn rust_files(dir: &str) -> Vec<PathBuf> {
    let root = workspace_root().join(dir);
    if !root.exists() {
        return Vec::new();
    }
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Code before the first `#[cfg(test)]`, with `//` comments stripped
///
/// Unit tests sit at the bottom of each file, so this is the production part.
pub fn production_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .map(|(idx, line)| (idx + 1, line.split("//").next().unwrap_or(line)))
        .collect()
}

/// Production lines in `dir` containing any of `needles`
pub fn scan(dir: &str, needles: &[&str], skip: impl Fn(&Path) -> bool) -> Vec<Violation> {
    let root = workspace_root();
    let mut violations = Vec::new();
    for path in rust_files(dir) {
        if skip(&path) {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (line, code) in production_lines(&content) {
            if needles.iter().any(|n| code.contains(n)) {
                violations.push(Violation {
                    path: path.strip_prefix(&root).unwrap_or(&path).to_path_buf(),
                    line,
                    text: code.trim().to_string(),
                });
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_lines_stop_at_test_module() {
        let src = "fn a() {} // sleep(\nfn b() {}\n#[cfg(test)]\nmod tests {}\n";
        let lines = production_lines(src);
        assert_eq!(lines, vec![(1, "fn a() {} "), (2, "fn b() {}")]);
    }

    #[test]
    fn test_workspace_root_has_members() {
        assert!(workspace_root().join("orchestrator/core/src/lib.rs").exists());
        assert!(workspace_root().join("tui/src/app.rs").exists());
    }
}
