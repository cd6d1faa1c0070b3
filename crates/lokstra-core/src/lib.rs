//! Lokstra Core
//!
//! Domain and application layers for the Lokstra CLI, following a
//! ports-and-adapters split:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          lokstra-cli (binary)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Services             │
//! │           (GenerateService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Resolver, Renderer, Fs, DependencyTools)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     lokstra-adapters (Infrastructure)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (`ServiceUri`, `ProjectKind`, `TemplateContext`, the lint
//! checks) is pure and has no I/O; all filesystem and process work lives
//! behind the port traits.

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Lint subsystem (pure checks over file content)
pub mod lint;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService,
        ports::{DependencyTools, Filesystem, TemplateResolver, TreeRenderer},
    };
    pub use crate::domain::{
        ModuleManifest, ProjectKind, ResolvedTemplate, ServiceUri, TemplateContext,
    };
    pub use crate::error::{LokstraError, LokstraResult};
    pub use crate::lint::{LintIssue, LintReport};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
