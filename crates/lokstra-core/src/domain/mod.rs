//! Core domain layer for the Lokstra CLI.
//!
//! Pure business logic: the service-URI grammar, the closed set of project
//! kinds, the substitution context used while rendering, and the small value
//! types the generator passes around. No I/O happens here — filesystem and
//! process concerns live behind the ports in `crate::application`.

pub mod context;
pub mod error;
pub mod manifest;
pub mod project_kind;
pub mod service_uri;
pub mod template;

// Re-exports for convenience
pub use context::TemplateContext;
pub use error::{DomainError, UriError};
pub use manifest::{GO_VERSION, ModuleManifest};
pub use project_kind::ProjectKind;
pub use service_uri::{SERVICE_SCHEME, ServiceUri};
pub use template::ResolvedTemplate;
