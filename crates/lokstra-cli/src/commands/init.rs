//! Implementation of the `lokstra init` command.
//!
//! Responsibility: translate CLI arguments into a generation request, wire
//! the adapters, call the core generate service, and display results.  No
//! business logic lives here.

use tracing::{debug, info, instrument};

use lokstra_adapters::{
    FsTreeRenderer, GoToolchain, LayeredResolver, LocalFilesystem, SkipDependencyTools,
};
use lokstra_core::{
    application::{GenerateService, ports::DependencyTools},
    domain::ProjectKind,
};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `lokstra init` command.
///
/// Dispatch sequence:
/// 1. Validate the project name
/// 2. Derive the module path (flag, or config prefix + name)
/// 3. Refuse to clobber an existing project directory
/// 4. Wire adapters and run the generate service
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(kind = %args.project_type, name = %args.name))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    validate_project_name(&args.name)?;

    let kind = ProjectKind::from(args.project_type);
    let module_path = args
        .module
        .clone()
        .unwrap_or_else(|| config.default_module_path(&args.name));
    let template_hint = args.template.as_deref().unwrap_or("");

    debug!(%kind, module_path, template_hint, "init request resolved");

    let project_path = match &args.output {
        Some(dir) => dir.join(&args.name),
        None => std::path::Path::new(".").join(&args.name),
    };
    if project_path.exists() {
        return Err(CliError::ProjectExists { path: project_path });
    }

    let deps: Box<dyn DependencyTools> = if args.skip_deps {
        Box::new(SkipDependencyTools::new())
    } else {
        Box::new(GoToolchain::new())
    };
    let service = GenerateService::new(
        Box::new(LayeredResolver::new(config.defaults.template.clone())),
        Box::new(FsTreeRenderer::new()),
        Box::new(LocalFilesystem::new()),
        deps,
    );

    output.header(&format!("Creating {kind} '{}'...", args.name))?;
    info!(name = %args.name, "generation started");

    let root = service.generate(
        kind,
        &args.name,
        &module_path,
        template_hint,
        args.output.as_deref(),
    )?;

    info!(root = %root.display(), "generation completed");
    output.success(&format!("Project '{}' created!", args.name))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", root.display()))?;
        if args.skip_deps {
            output.print("  go mod tidy")?;
        }
        if kind == ProjectKind::Server {
            output.print("  go run cmd/main.go")?;
        }
    }

    Ok(())
}

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_rejected() {
        assert!(validate_project_name("").is_err());
    }

    #[test]
    fn hidden_name_rejected() {
        assert!(validate_project_name(".config").is_err());
    }

    #[test]
    fn path_separators_rejected() {
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("a\\b").is_err());
    }

    #[test]
    fn plain_names_accepted() {
        assert!(validate_project_name("my-api").is_ok());
        assert!(validate_project_name("billing_module").is_ok());
        assert!(validate_project_name("payment2").is_ok());
    }
}
