//! Go toolchain invocation for generated projects.

use std::path::Path;
use std::process::Command;

use tracing::{info, instrument};

use lokstra_core::{
    application::{ApplicationError, ports::DependencyTools},
    error::LokstraResult,
};

/// Module path of the framework dependency pulled into every new project.
pub const FRAMEWORK_MODULE: &str = "github.com/primadi/lokstra";

/// Dependency tooling backed by the `go` binary on PATH.
///
/// Commands inherit the parent stdio so toolchain output (download progress,
/// module graph warnings) reaches the user directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoToolchain;

impl GoToolchain {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, root: &Path, args: &[&str]) -> LokstraResult<()> {
        let command = format!("go {}", args.join(" "));
        info!(%command, root = %root.display(), "running go toolchain");

        let status = Command::new("go")
            .args(args)
            .current_dir(root)
            .status()
            .map_err(|e| ApplicationError::CommandFailed {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(ApplicationError::CommandFailed {
                command,
                reason: format!("exited with {status}"),
            }
            .into());
        }
        Ok(())
    }
}

impl DependencyTools for GoToolchain {
    #[instrument(skip(self), fields(root = %root.display()))]
    fn fetch(&self, root: &Path) -> LokstraResult<()> {
        self.run(root, &["get", &format!("{FRAMEWORK_MODULE}@latest")])
    }

    #[instrument(skip(self), fields(root = %root.display()))]
    fn tidy(&self, root: &Path) -> LokstraResult<()> {
        self.run(root, &["mod", "tidy"])
    }
}

/// No-op dependency tooling for `--skip-deps` runs and offline environments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipDependencyTools;

impl SkipDependencyTools {
    pub fn new() -> Self {
        Self
    }
}

impl DependencyTools for SkipDependencyTools {
    fn fetch(&self, _root: &Path) -> LokstraResult<()> {
        info!("skipping dependency fetch");
        Ok(())
    }

    fn tidy(&self, _root: &Path) -> LokstraResult<()> {
        info!("skipping module tidy");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_working_directory_surfaces_command_failure() {
        let toolchain = GoToolchain::new();
        let err = toolchain
            .fetch(Path::new("/nonexistent/project/root"))
            .unwrap_err();
        assert!(err.to_string().contains("go get"));
    }

    #[test]
    fn skip_tools_always_succeed() {
        let tools = SkipDependencyTools::new();
        tools.fetch(Path::new("/anywhere")).unwrap();
        tools.tidy(Path::new("/anywhere")).unwrap();
    }
}
