//! Application layer errors.
//!
//! Failures of orchestration and infrastructure, as opposed to the grammar
//! violations in `crate::domain::error`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the generation pipeline and its ports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No tier of the template search produced an existing directory.
    #[error(
        "template '{hint}' not found (searched: {} and {})",
        direct.display(),
        builtin.display()
    )]
    TemplateNotFound {
        hint: String,
        /// The hint interpreted as a filesystem path.
        direct: PathBuf,
        /// The built-in location `scaffold/<hint>`.
        builtin: PathBuf,
    },

    /// A template file could not be rendered.
    #[error("failed to render {}: {reason}", path.display())]
    RenderFailed { path: PathBuf, reason: String },

    /// A filesystem operation failed.
    #[error("filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// A dependency-tool collaborator exited unsuccessfully. The reason
    /// carries the command's own error text, unmodified.
    #[error("command '{command}' failed: {reason}")]
    CommandFailed { command: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_hint_and_both_locations() {
        let err = ApplicationError::TemplateNotFound {
            hint: "custom".into(),
            direct: PathBuf::from("custom"),
            builtin: PathBuf::from("scaffold/custom"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'custom'"));
        assert!(msg.contains("custom"));
        assert!(msg.contains("scaffold"));
    }
}
