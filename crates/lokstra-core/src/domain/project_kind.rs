//! The closed set of project kinds the generator knows how to scaffold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// What kind of Lokstra project to generate.
///
/// Doubles as the name of the per-kind subdirectory inside a template root:
/// a template for `ProjectKind::Server` lives under `<root>/server/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Server,
    Module,
    Service,
    Middleware,
    Plugin,
}

impl ProjectKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Module => "module",
            Self::Service => "service",
            Self::Middleware => "middleware",
            Self::Plugin => "plugin",
        }
    }

    /// All recognized kinds, in display order.
    pub const ALL: [ProjectKind; 5] = [
        Self::Server,
        Self::Module,
        Self::Service,
        Self::Middleware,
        Self::Plugin,
    ];
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "server" => Ok(Self::Server),
            "module" => Ok(Self::Module),
            "service" => Ok(Self::Service),
            "middleware" => Ok(Self::Middleware),
            "plugin" => Ok(Self::Plugin),
            other => Err(DomainError::InvalidProjectKind(other.to_string())),
        }
    }
}
