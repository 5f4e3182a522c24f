//! Style Enforcement Tests
//!
//! Scans production sources of every library and binary crate for patterns
//! that clippy does not reject on its own. Code after the first
//! `#[cfg(test)]` in a file is treated as test code and skipped.

use std::fs;
use std::path::{Path, PathBuf};

const PRODUCTION_CRATES: &[&str] = &[
    "carfinder-core",
    "carfinder-search",
    "carfinder-web",
    "carfinder-cli",
];

const BANNED_PATTERNS: &[(&str, &str)] = &[
    ("#[allow(dead_code)]", "dead code allowance"),
    (".unwrap()", "unwrap in production code"),
    (".expect(", "expect in production code"),
];

/// A banned pattern found in production code
#[derive(Debug)]
struct StyleViolation {
    file_path: String,
    line_number: usize,
    kind: &'static str,
    context: String,
}

/// Checker for banned patterns in production code
struct ProductionCodeChecker {
    violations: Vec<StyleViolation>,
    files_checked: usize,
}

impl ProductionCodeChecker {
    fn new() -> Self {
        Self {
            violations: Vec::new(),
            files_checked: 0,
        }
    }

    fn find_rust_files(dir: &Path, files: &mut Vec<PathBuf>, depth: usize) -> std::io::Result<()> {
        // Prevent infinite recursion
        if depth > 8 || !dir.is_dir() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                Self::find_rust_files(&path, files, depth + 1)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
        Ok(())
    }

    fn check_file(&mut self, path: &Path) -> std::io::Result<()> {
        let content = fs::read_to_string(path)?;
        self.files_checked += 1;

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("#[cfg(test)]") {
                break;
            }
            if trimmed.starts_with("//") {
                continue;
            }

            for &(pattern, kind) in BANNED_PATTERNS {
                if trimmed.contains(pattern) {
                    self.violations.push(StyleViolation {
                        file_path: path.display().to_string(),
                        line_number: index + 1,
                        kind,
                        context: trimmed.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_workspace(&mut self, root: &Path) -> std::io::Result<()> {
        let mut files = Vec::new();
        for krate in PRODUCTION_CRATES {
            Self::find_rust_files(&root.join(krate).join("src"), &mut files, 0)?;
        }
        for file in files {
            self.check_file(&file)?;
        }
        Ok(())
    }

    fn report(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("{}:{} {}: {}", v.file_path, v.line_number, v.kind, v.context))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[test]
fn test_production_code_has_no_banned_patterns() {
    let mut checker = ProductionCodeChecker::new();
    checker.check_workspace(Path::new("..")).unwrap();

    assert!(checker.files_checked > 0, "no source files found");
    assert!(
        checker.violations.is_empty(),
        "Found {} violations:\n{}",
        checker.violations.len(),
        checker.report()
    );
}

#[test]
fn test_checker_flags_unwrap_before_test_module() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.rs");
    fs::write(
        &file,
        "fn a() { x.unwrap(); }\n// y.unwrap() in a comment\n#[cfg(test)]\nmod tests { fn b() { z.unwrap(); } }\n",
    )
    .unwrap();

    let mut checker = ProductionCodeChecker::new();
    checker.check_file(&file).unwrap();

    assert_eq!(checker.violations.len(), 1);
    assert_eq!(checker.violations[0].line_number, 1);
}
