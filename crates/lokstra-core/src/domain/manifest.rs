//! The generated module manifest (`go.mod`).

use std::fmt;

/// Toolchain version declared in every generated manifest.
pub const GO_VERSION: &str = "1.24";

/// The module declaration written at the root of a new project,
/// before any template file is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleManifest {
    module_path: String,
}

impl ModuleManifest {
    pub fn new(module_path: impl Into<String>) -> Self {
        Self {
            module_path: module_path.into(),
        }
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    /// File name the manifest is written under.
    pub const FILE_NAME: &'static str = "go.mod";
}

impl fmt::Display for ModuleManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "module {}\n\ngo {GO_VERSION}\n", self.module_path)
    }
}
