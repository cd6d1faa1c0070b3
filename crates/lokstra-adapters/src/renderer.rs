//! Recursive template-tree rendering.
//!
//! Walks every regular file under a template root and mirrors its relative
//! path under the output root. Files carrying the `.tpl` marker extension are
//! rendered against the substitution context (and lose the marker in their
//! output name); everything else is copied byte-for-byte. The first failure
//! aborts the remaining traversal; files already written stay on disk.

use std::path::Path;

use tracing::{debug, instrument};
use walkdir::WalkDir;

use lokstra_core::{
    application::{ApplicationError, ports::TreeRenderer},
    domain::TemplateContext,
    error::LokstraResult,
};

use crate::filesystem::map_io_error;

/// File-name suffix marking a file as a substitution template.
pub const TEMPLATE_MARKER: &str = "tpl";

/// Per-file dispatch, decided once during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    /// Render with the context; strip the marker from the output name.
    Template,
    /// Copy verbatim under the original name.
    Static,
}

fn classify(path: &Path) -> FileKind {
    if path.extension().is_some_and(|ext| ext == TEMPLATE_MARKER) {
        FileKind::Template
    } else {
        FileKind::Static
    }
}

/// Filesystem-backed tree renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTreeRenderer;

impl FsTreeRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TreeRenderer for FsTreeRenderer {
    #[instrument(skip(self, ctx), fields(template_root = %template_root.display()))]
    fn render(
        &self,
        template_root: &Path,
        output_root: &Path,
        ctx: &TemplateContext,
    ) -> LokstraResult<()> {
        if !template_root.is_dir() {
            return Err(ApplicationError::RenderFailed {
                path: template_root.to_path_buf(),
                reason: "template root is not a directory".into(),
            }
            .into());
        }

        for entry in WalkDir::new(template_root) {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map_or_else(|| template_root.to_path_buf(), Path::to_path_buf);
                ApplicationError::FilesystemError {
                    path,
                    reason: e.to_string(),
                }
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(template_root)
                .expect("walked path is under its root");
            let out_path = output_root.join(rel);

            match classify(entry.path()) {
                FileKind::Template => render_template_file(entry.path(), &out_path, ctx)?,
                FileKind::Static => copy_static_file(entry.path(), &out_path)?,
            }
        }

        Ok(())
    }
}

/// Render one `.tpl` file to its marker-stripped output path.
fn render_template_file(src: &Path, out_path: &Path, ctx: &TemplateContext) -> LokstraResult<()> {
    let out_path = out_path.with_extension("");

    let raw = std::fs::read_to_string(src).map_err(|e| ApplicationError::RenderFailed {
        path: src.to_path_buf(),
        reason: format!("failed to read template: {e}"),
    })?;

    let rendered = ctx
        .render_str(&raw)
        .map_err(|e| ApplicationError::RenderFailed {
            path: src.to_path_buf(),
            reason: e.to_string(),
        })?;

    ensure_parent(&out_path)?;
    std::fs::write(&out_path, rendered).map_err(|e| map_io_error(&out_path, e, "write file"))?;
    debug!(src = %src.display(), out = %out_path.display(), "rendered template file");
    Ok(())
}

/// Copy one static file verbatim.
fn copy_static_file(src: &Path, out_path: &Path) -> LokstraResult<()> {
    ensure_parent(out_path)?;
    std::fs::copy(src, out_path).map_err(|e| map_io_error(out_path, e, "copy file"))?;
    debug!(src = %src.display(), out = %out_path.display(), "copied static file");
    Ok(())
}

fn ensure_parent(path: &Path) -> LokstraResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create directory"))?;
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
