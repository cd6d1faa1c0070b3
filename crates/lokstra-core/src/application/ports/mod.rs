//! Application ports (traits) for external dependencies.
//!
//! The application layer drives these; `lokstra-adapters` implements them.
//! All four are object-safe so the generate service can hold them boxed, and
//! automocked for orchestration tests.

use std::path::Path;

use crate::domain::{ResolvedTemplate, TemplateContext};
use crate::error::LokstraResult;

/// Locates a template root from a user-supplied hint.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateResolver {
    /// Resolve `hint` to an existing template directory.
    ///
    /// An empty hint means "use the configured default". The returned
    /// template's path exists at the moment of resolution.
    fn resolve(&self, hint: &str) -> LokstraResult<ResolvedTemplate>;
}

/// Mirrors a template tree under an output root, rendering `.tpl` files
/// against a context and copying everything else verbatim.
#[cfg_attr(test, mockall::automock)]
pub trait TreeRenderer {
    fn render(
        &self,
        template_root: &Path,
        output_root: &Path,
        ctx: &TemplateContext,
    ) -> LokstraResult<()>;
}

/// The few filesystem operations the generate service performs itself.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    fn create_dir_all(&self, path: &Path) -> LokstraResult<()>;

    /// Create-or-truncate write.
    fn write_file(&self, path: &Path, content: &str) -> LokstraResult<()>;
}

/// Dependency-tool collaborators run after a successful render, with the
/// generated project root as working directory. Either failing aborts the
/// generation; the command's error text is surfaced verbatim.
#[cfg_attr(test, mockall::automock)]
pub trait DependencyTools {
    /// Fetch the framework dependency (`go get`).
    fn fetch(&self, project_root: &Path) -> LokstraResult<()>;

    /// Tidy the module graph (`go mod tidy`).
    fn tidy(&self, project_root: &Path) -> LokstraResult<()>;
}
