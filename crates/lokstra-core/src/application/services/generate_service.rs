//! Project generation — the `init` use case.
//!
//! Pipeline: create the output root, write the module manifest, resolve the
//! template, render the per-kind subtree, then hand the project to the
//! dependency tools. Fail-fast: the first failure aborts the run and any
//! files already written stay on disk (no rollback).

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::ports::{DependencyTools, Filesystem, TemplateResolver, TreeRenderer},
    domain::{ModuleManifest, ProjectKind, TemplateContext},
    error::LokstraResult,
};

/// Orchestrates one generation run.
///
/// Callers guarantee `kind` is a recognized project kind — the CLI's value
/// enum enforces that before this service is reached.
pub struct GenerateService {
    resolver: Box<dyn TemplateResolver>,
    renderer: Box<dyn TreeRenderer>,
    filesystem: Box<dyn Filesystem>,
    deps: Box<dyn DependencyTools>,
}

impl GenerateService {
    pub fn new(
        resolver: Box<dyn TemplateResolver>,
        renderer: Box<dyn TreeRenderer>,
        filesystem: Box<dyn Filesystem>,
        deps: Box<dyn DependencyTools>,
    ) -> Self {
        Self {
            resolver,
            renderer,
            filesystem,
            deps,
        }
    }

    /// Generate a new project skeleton.
    ///
    /// The output root is `<output_dir>/<name>`, or `./<name>` when no
    /// output directory is given. Returns the project root on success.
    #[instrument(
        skip_all,
        fields(kind = %kind, name = name, template = template_hint)
    )]
    pub fn generate(
        &self,
        kind: ProjectKind,
        name: &str,
        module_path: &str,
        template_hint: &str,
        output_dir: Option<&Path>,
    ) -> LokstraResult<PathBuf> {
        let root = match output_dir {
            Some(dir) => dir.join(name),
            None => Path::new(".").join(name),
        };

        self.filesystem.create_dir_all(&root)?;

        let template = self.resolver.resolve(template_hint)?;
        info!(template = template.name(), path = %template.path().display(), "template resolved");

        // Manifest goes in before any template file.
        let manifest = ModuleManifest::new(module_path);
        self.filesystem
            .write_file(&root.join(ModuleManifest::FILE_NAME), &manifest.to_string())?;

        let ctx = TemplateContext::new(name, module_path);
        let kind_root = template.kind_root(kind);
        self.renderer.render(&kind_root, &root, &ctx)?;
        info!("template rendered");

        self.deps.fetch(&root)?;
        self.deps.tidy(&root)?;

        info!(root = %root.display(), "project generated");
        Ok(root)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
