//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use lokstra_core::domain::ProjectKind;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "lokstra",
    bin_name = "lokstra",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Lokstra project generator and linter",
    long_about = "Lokstra scaffolds new backend projects from templates and \
                  lints existing projects for malformed YAML and service URIs.",
    after_help = "EXAMPLES:\n\
        \x20 lokstra init server my-api\n\
        \x20 lokstra init module billing --module github.com/acme/billing\n\
        \x20 lokstra lint\n\
        \x20 lokstra completions bash > /usr/share/bash-completion/completions/lokstra",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project skeleton.
    #[command(
        visible_alias = "i",
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 lokstra init server my-api\n\
            \x20 lokstra init service payment --module github.com/acme/payment\n\
            \x20 lokstra init middleware auth --template ./my-templates\n\
            \x20 lokstra init server demo --skip-deps"
    )]
    Init(InitArgs),

    /// Check YAML files and service URIs in the current project.
    #[command(
        about = "Lint the current project tree",
        after_help = "EXAMPLES:\n\
            \x20 lokstra lint\n\
            \x20 lokstra -v lint"
    )]
    Lint(LintArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 lokstra completions bash > ~/.local/share/bash-completion/completions/lokstra\n\
            \x20 lokstra completions zsh  > ~/.zfunc/_lokstra\n\
            \x20 lokstra completions fish > ~/.config/fish/completions/lokstra.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `lokstra init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// What kind of project to generate.
    #[arg(value_name = "TYPE", value_enum, help = "Project type to generate")]
    pub project_type: ProjectType,

    /// Project name; also the output directory name.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Go module path for the generated go.mod.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "PATH",
        help = "Go module path (default: github.com/example/<name>)"
    )]
    pub module: Option<String>,

    /// Template name or directory path.
    #[arg(
        short = 't',
        long = "template",
        value_name = "NAME|PATH",
        help = "Template name under scaffold/ or an explicit directory"
    )]
    pub template: Option<String>,

    /// Override the output directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory for the new project (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Skip `go get` / `go mod tidy` after generation.
    #[arg(long = "skip-deps", help = "Skip dependency fetch and module tidy")]
    pub skip_deps: bool,
}

/// Project types accepted by `init`.
///
/// Mirrors [`ProjectKind`]; kept separate so clap metadata stays out of the
/// core crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProjectType {
    Server,
    Module,
    Service,
    Middleware,
    Plugin,
}

impl From<ProjectType> for ProjectKind {
    fn from(t: ProjectType) -> Self {
        match t {
            ProjectType::Server => ProjectKind::Server,
            ProjectType::Module => ProjectKind::Module,
            ProjectType::Service => ProjectKind::Service,
            ProjectType::Middleware => ProjectKind::Middleware,
            ProjectType::Plugin => ProjectKind::Plugin,
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ProjectKind::from(*self))
    }
}

// ── lint ──────────────────────────────────────────────────────────────────────

/// Arguments for `lokstra lint`.
#[derive(Debug, Args)]
pub struct LintArgs {
    /// Directory to scan.
    #[arg(
        value_name = "DIR",
        default_value = ".",
        help = "Project directory to scan"
    )]
    pub dir: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `lokstra completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
