//! The service-reference grammar.
//!
//! Lokstra code and config name service instances with a custom-scheme URI:
//!
//! ```text
//! lokstra://[package.]Interface/instanceName
//! ```
//!
//! The host component is the *serviceType*: either a bare interface name or
//! `package.Interface`. The path component (trimmed of slashes) is the
//! instance name. Interface names must be upper-camel-case.
//!
//! Parsing is a pure function over the input string; it is used standalone
//! and by the lint subsystem after token extraction.

use std::fmt;

use url::Url;

use crate::domain::error::UriError;

/// The fixed scheme every service reference must carry.
pub const SERVICE_SCHEME: &str = "lokstra";

/// A structurally valid, parsed service reference.
///
/// Immutable after parse; construct only via [`ServiceUri::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUri {
    package: Option<String>,
    interface: String,
    instance: String,
}

impl ServiceUri {
    /// Parse and validate a service-reference string.
    ///
    /// Rules are applied in a fixed order so that the reported reason is
    /// deterministic: URI syntax, scheme, serviceType presence, instance
    /// presence, serviceType shape, interface casing.
    pub fn parse(input: &str) -> Result<Self, UriError> {
        let url = match Url::parse(input) {
            Ok(url) => url,
            // A string with no scheme at all is reported as a scheme
            // violation, not a syntax error: `http://...` and `plaintext`
            // both fail rule 2, only genuinely malformed syntax fails rule 1.
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                return Err(UriError::InvalidScheme(String::new()));
            }
            Err(e) => return Err(UriError::Malformed(e.to_string())),
        };

        if url.scheme() != SERVICE_SCHEME {
            return Err(UriError::InvalidScheme(url.scheme().to_string()));
        }

        let host = url.host_str().unwrap_or("");
        if host.is_empty() {
            return Err(UriError::MissingServiceType);
        }

        let instance = url.path().trim_matches('/');
        if instance.is_empty() {
            return Err(UriError::MissingInstanceName);
        }

        let parts: Vec<&str> = host.split('.').collect();
        let (package, interface) = match parts.as_slice() {
            [iface] => (None, *iface),
            // package.Interface — the package qualifier is carried but not
            // itself validated.
            [pkg, iface] => (Some(pkg.to_string()), *iface),
            _ => return Err(UriError::InvalidServiceTypeFormat(host.to_string())),
        };

        if !is_camel_case(interface) {
            return Err(UriError::NotCamelCase(interface.to_string()));
        }

        Ok(Self {
            package,
            interface: interface.to_string(),
            instance: instance.to_string(),
        })
    }

    /// Validate without keeping the parsed form.
    pub fn validate(input: &str) -> Result<(), UriError> {
        Self::parse(input).map(|_| ())
    }

    /// The optional package qualifier.
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// The interface name (always upper-camel-case).
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// The service instance name.
    pub fn instance(&self) -> &str {
        &self.instance
    }
}

impl fmt::Display for ServiceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.package {
            Some(pkg) => write!(
                f,
                "{SERVICE_SCHEME}://{pkg}.{}/{}",
                self.interface, self.instance
            ),
            None => write!(f, "{SERVICE_SCHEME}://{}/{}", self.interface, self.instance),
        }
    }
}

/// Upper-camel-case check: leading uppercase letter, no underscores.
fn is_camel_case(s: &str) -> bool {
    let starts_upper = s.chars().next().is_some_and(|c| c.is_uppercase());
    starts_upper && !s.contains('_')
}

// ── tests ─────────────────────────────────────────────────────────────────────
