//! Application layer.
//!
//! Orchestration only — the generation use case and the port traits it
//! drives. Business rules stay in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{DependencyTools, Filesystem, TemplateResolver, TreeRenderer};
pub use services::GenerateService;
