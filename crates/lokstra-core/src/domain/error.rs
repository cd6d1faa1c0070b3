use thiserror::Error;

/// Why a service-reference string failed validation.
///
/// The messages are part of the tool's contract — the lint output quotes them
/// verbatim — so they are fixed here rather than composed at call-sites.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UriError {
    /// The string could not be parsed as a URI at all.
    #[error("invalid URI: {0}")]
    Malformed(String),

    /// Parsed, but the scheme is not `lokstra`.
    #[error("invalid scheme: {0}")]
    InvalidScheme(String),

    /// The authority (serviceType) component is empty.
    #[error("missing serviceType (interface)")]
    MissingServiceType,

    /// The path component is empty after trimming `/`.
    #[error("missing service instance name")]
    MissingInstanceName,

    /// The host has more than two dot-separated segments.
    #[error("invalid serviceType format: {0}")]
    InvalidServiceTypeFormat(String),

    /// The interface segment is not upper-camel-case.
    #[error("interface name must be CamelCase: {0}")]
    NotCamelCase(String),
}

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A service-reference string violated the URI grammar.
    #[error(transparent)]
    Uri(#[from] UriError),

    /// A string did not name one of the recognized project kinds.
    #[error("invalid project type: {0}")]
    InvalidProjectKind(String),

    /// A template referenced a variable the context does not define.
    #[error("unknown template variable: {name}")]
    UnknownVariable { name: String },

    /// A `{{` placeholder was never closed.
    #[error("unterminated placeholder starting at offset {offset}")]
    UnterminatedPlaceholder { offset: usize },
}
