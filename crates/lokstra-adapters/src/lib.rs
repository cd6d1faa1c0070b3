//! Infrastructure adapters for the Lokstra CLI.
//!
//! This crate implements the ports defined in `lokstra_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod resolver;
pub mod toolchain;

// Re-export commonly used adapters
pub use filesystem::LocalFilesystem;
pub use renderer::FsTreeRenderer;
pub use resolver::LayeredResolver;
pub use toolchain::{GoToolchain, SkipDependencyTools};
