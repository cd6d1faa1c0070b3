//! Implementation of the `lokstra lint` command.
//!
//! Walks the project tree and prints every finding: Go sources get the
//! service-URI check, YAML files the syntax check.  Lint never aborts on a
//! bad file; a non-empty report maps to a user-error exit via
//! [`CliError::LintFailed`].

use std::path::Path;

use tracing::{debug, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use lokstra_core::lint::{LintReport, check_service_uris, check_yaml_syntax};

use crate::{
    cli::{GlobalArgs, LintArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Directories never worth scanning.
const EXCLUDED_DIRS: &[&str] = &[".git", "vendor", "node_modules", "bin", "dist"];

/// Files the linter looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    Go,
    Yaml,
}

fn classify(path: &Path) -> Option<SourceKind> {
    match path.extension()?.to_str()? {
        "go" => Some(SourceKind::Go),
        "yaml" | "yml" => Some(SourceKind::Yaml),
        _ => None,
    }
}

fn is_excluded(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

/// Execute the `lokstra lint` command.
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(args: LintArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let mut report = LintReport::new();
    let mut scanned = 0usize;

    for entry in WalkDir::new(&args.dir)
        .into_iter()
        .filter_entry(|e| !is_excluded(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // An unreadable directory is reported but never fatal.
                warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(kind) = classify(entry.path()) else {
            continue;
        };

        let content = match std::fs::read_to_string(entry.path()) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %entry.path().display(), "skipping unreadable file: {e}");
                continue;
            }
        };

        scanned += 1;
        debug!(path = %entry.path().display(), ?kind, "scanning");

        match kind {
            SourceKind::Go => report.extend(check_service_uris(entry.path(), &content)),
            SourceKind::Yaml => report.extend(check_yaml_syntax(entry.path(), &content)),
        }
    }

    for issue in report.issues() {
        output.error(&issue.to_string())?;
    }

    if report.is_clean() {
        output.success(&format!("{scanned} file(s) checked, no issues found"))?;
        Ok(())
    } else {
        output.print("")?;
        output.print(&format!(
            "{scanned} file(s) checked, {} issue(s) found",
            report.len()
        ))?;
        Err(CliError::LintFailed {
            count: report.len(),
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_recognizes_go_and_yaml() {
        assert_eq!(classify(Path::new("main.go")), Some(SourceKind::Go));
        assert_eq!(classify(Path::new("app.yaml")), Some(SourceKind::Yaml));
        assert_eq!(classify(Path::new("app.yml")), Some(SourceKind::Yaml));
        assert_eq!(classify(Path::new("main.rs")), None);
        assert_eq!(classify(Path::new("Makefile")), None);
    }

    #[test]
    fn excluded_directory_names() {
        // The filter only sees DirEntry values from a real walk, so drive it
        // through a temp tree instead of constructing entries by hand.
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join("vendor")).unwrap();
        std::fs::write(temp.path().join("vendor/skipped.go"), "x").unwrap();
        std::fs::create_dir(temp.path().join("internal")).unwrap();
        std::fs::write(temp.path().join("internal/kept.go"), "x").unwrap();

        let walked: Vec<_> = WalkDir::new(temp.path())
            .into_iter()
            .filter_entry(|e| !is_excluded(e))
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .collect();

        assert!(walked.iter().any(|p| p.ends_with("internal/kept.go")));
        assert!(!walked.iter().any(|p| p.ends_with("vendor/skipped.go")));
    }
}
