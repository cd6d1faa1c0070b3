//! The output of template resolution.

use std::path::{Path, PathBuf};

/// A template root located on disk.
///
/// Produced by a `TemplateResolver` and consumed once by the renderer; the
/// path points to an existing directory at the moment of resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    name: String,
    path: PathBuf,
}

impl ResolvedTemplate {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// The logical template name the resolution started from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The template root directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The per-kind subdirectory for a given project kind.
    pub fn kind_root(&self, kind: crate::domain::ProjectKind) -> PathBuf {
        self.path.join(kind.as_str())
    }
}
