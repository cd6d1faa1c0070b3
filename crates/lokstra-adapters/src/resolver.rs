//! Layered template path resolution.
//!
//! A template hint is tried against up to two locations, first match wins:
//!
//! 1. the hint as a directory path, absolute or relative to the working
//!    directory — returned in absolute form;
//! 2. `scaffold/<hint>` — the built-in templates root, returned as-is.
//!
//! An empty hint is first substituted with the configured default template
//! name (operator-wide override, e.g. from `LOKSTRA_TEMPLATE`), falling back
//! to the literal `default`. The substituted value feeds both tiers.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use lokstra_core::{
    application::{ApplicationError, ports::TemplateResolver},
    domain::ResolvedTemplate,
    error::LokstraResult,
};

use crate::filesystem::map_io_error;

/// Fallback template name when neither the hint nor the configured default
/// supplies one.
pub const DEFAULT_TEMPLATE_NAME: &str = "default";

/// Built-in templates root, relative to the working directory.
pub const SCAFFOLD_ROOT: &str = "scaffold";

/// Resolver implementing the layered search strategy.
#[derive(Debug, Clone)]
pub struct LayeredResolver {
    scaffold_root: PathBuf,
    default_template: Option<String>,
}

impl LayeredResolver {
    /// `default_template` is the configured default name, passed in
    /// explicitly rather than read from the environment here.
    pub fn new(default_template: Option<String>) -> Self {
        Self {
            scaffold_root: PathBuf::from(SCAFFOLD_ROOT),
            default_template,
        }
    }

    /// Override the built-in templates root (tests, unusual layouts).
    pub fn with_scaffold_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scaffold_root = root.into();
        self
    }

    fn working_hint<'a>(&'a self, hint: &'a str) -> &'a str {
        if !hint.is_empty() {
            return hint;
        }
        self.default_template
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_TEMPLATE_NAME)
    }
}

impl TemplateResolver for LayeredResolver {
    #[instrument(skip(self))]
    fn resolve(&self, hint: &str) -> LokstraResult<ResolvedTemplate> {
        let hint = self.working_hint(hint);

        // Tier 1: the hint as a directory path.
        let direct = Path::new(hint);
        if direct.is_dir() {
            let abs =
                std::path::absolute(direct).map_err(|e| map_io_error(direct, e, "absolutize"))?;
            debug!(path = %abs.display(), "resolved template as direct path");
            return Ok(ResolvedTemplate::new(hint, abs));
        }

        // Tier 2: a named built-in under the scaffold root, kept as-is.
        let builtin = self.scaffold_root.join(hint);
        if builtin.is_dir() {
            debug!(path = %builtin.display(), "resolved template under scaffold root");
            return Ok(ResolvedTemplate::new(hint, builtin));
        }

        Err(ApplicationError::TemplateNotFound {
            hint: hint.to_string(),
            direct: direct.to_path_buf(),
            builtin,
        }
        .into())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
