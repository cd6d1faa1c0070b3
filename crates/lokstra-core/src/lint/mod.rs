//! Static lint checks.
//!
//! Two detectors over `(path, content)` pairs:
//!
//! - service-reference check: every `lokstra://…` token embedded in source
//!   text is validated against the URI grammar;
//! - YAML check: the whole file must parse structurally.
//!
//! Checks never abort. Every violation becomes a [`LintIssue`]; the caller
//! accumulates them into a [`LintReport`] and decides what to do with the
//! tally. Walking the filesystem and reading files is the CLI's job.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::ServiceUri;

mod report;

pub use report::LintReport;

/// One detected violation: the file it was found in plus a message.
///
/// No severity, no deduplication — presence in a report means "reported".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    pub path: PathBuf,
    pub message: String,
}

impl LintIssue {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Token pattern: the scheme literal, `://`, then everything up to
/// whitespace or a quote character.
fn service_uri_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"lokstra://[^\s"']+"#).expect("service URI pattern"))
}

/// Validate every service-reference token embedded in `content`.
///
/// Returns one issue per invalid token, in source order. Valid tokens and
/// token-free content produce no issues.
pub fn check_service_uris(path: &Path, content: &str) -> Vec<LintIssue> {
    service_uri_pattern()
        .find_iter(content)
        .filter_map(|m| {
            ServiceUri::validate(m.as_str())
                .err()
                .map(|e| LintIssue::new(path, e.to_string()))
        })
        .collect()
}

/// Structural YAML syntax check.
///
/// Parse failure yields exactly one issue naming the file; valid YAML
/// (including empty documents and top-level scalars) yields none.
pub fn check_yaml_syntax(path: &Path, content: &str) -> Vec<LintIssue> {
    match serde_yaml::from_str::<serde_yaml::Value>(content) {
        Ok(_) => Vec::new(),
        Err(e) => vec![LintIssue::new(
            path,
            format!("invalid YAML syntax: {e}"),
        )],
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> PathBuf {
        PathBuf::from("registry.go")
    }

    #[test]
    fn valid_references_produce_no_issues() {
        let src = r#"
            svc := ctx.GetService("lokstra://UserService/primary")
            other := ctx.GetService("lokstra://pkg.OrderService/replica")
        "#;
        assert!(check_service_uris(&p(), src).is_empty());
    }

    #[test]
    fn each_invalid_reference_is_reported_in_order() {
        let src = r#"
            a := "lokstra://user_service/primary"
            b := "lokstra://UserService/primary"
            c := "lokstra://a.b.c/primary"
        "#;
        let issues = check_service_uris(&p(), src);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("CamelCase"));
        assert!(issues[1].message.contains("invalid serviceType format"));
        assert_eq!(issues[0].path, p());
    }

    #[test]
    fn quotes_terminate_token_extraction() {
        // The closing quote must not be swallowed into the token.
        let src = r#"x := "lokstra://UserService/primary" // ok"#;
        assert!(check_service_uris(&p(), src).is_empty());
    }

    #[test]
    fn content_without_tokens_is_clean() {
        assert!(check_service_uris(&p(), "package main\n").is_empty());
    }

    #[test]
    fn missing_instance_inside_source_is_reported() {
        let src = r#"ref := "lokstra://UserService""#;
        let issues = check_service_uris(&p(), src);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("missing service instance name"));
    }

    #[test]
    fn valid_yaml_is_clean() {
        let yaml = "server:\n  port: 8080\n  name: demo\n";
        assert!(check_yaml_syntax(Path::new("config.yaml"), yaml).is_empty());
    }

    #[test]
    fn invalid_yaml_yields_one_issue_naming_the_file() {
        let yaml = "server:\n  port: [unclosed\n";
        let issues = check_yaml_syntax(Path::new("config.yaml"), yaml);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, PathBuf::from("config.yaml"));
        assert!(issues[0].message.contains("invalid YAML syntax"));
    }

    #[test]
    fn empty_yaml_is_clean() {
        assert!(check_yaml_syntax(Path::new("empty.yml"), "").is_empty());
    }

    #[test]
    fn issue_display_includes_path_and_message() {
        let issue = LintIssue::new("a/b.go", "invalid scheme: http");
        assert_eq!(issue.to_string(), "a/b.go: invalid scheme: http");
    }
}
