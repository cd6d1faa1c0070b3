//! The substitution context bound to `.tpl` files during rendering.

use std::collections::BTreeMap;

use crate::domain::error::DomainError;

/// Variables available to template files.
///
/// A flat name → value mapping, built once per generation run. The two
/// standard variables are `app_name` and `module_name`; callers may add more
/// with [`TemplateContext::with_var`]. Immutable once handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    vars: BTreeMap<String, String>,
}

impl TemplateContext {
    /// Build the standard context for one generation run.
    pub fn new(app_name: impl Into<String>, module_name: impl Into<String>) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert("app_name".to_string(), app_name.into());
        vars.insert("module_name".to_string(), module_name.into());
        Self { vars }
    }

    /// Add (or override) a named variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Look up a variable by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Substitute every `{{ var }}` reference in `input`.
    ///
    /// Unknown variables and unterminated placeholders are hard failures, not
    /// silent empty output — a bad template aborts the whole render.
    pub fn render_str(&self, input: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        let mut offset = 0;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let Some(end) = after_open.find("}}") else {
                return Err(DomainError::UnterminatedPlaceholder {
                    offset: offset + start,
                });
            };

            let name = after_open[..end].trim();
            match self.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    return Err(DomainError::UnknownVariable {
                        name: name.to_string(),
                    });
                }
            }

            let consumed = start + 2 + end + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_variables_are_present() {
        let ctx = TemplateContext::new("my-app", "github.com/example/my-app");
        assert_eq!(ctx.get("app_name"), Some("my-app"));
        assert_eq!(ctx.get("module_name"), Some("github.com/example/my-app"));
        assert_eq!(ctx.get("missing"), None);
    }

    #[test]
    fn renders_both_variables() {
        let ctx = TemplateContext::new("my-app", "github.com/example/my-app");
        let rendered = ctx
            .render_str("module {{ module_name }}\n// app: {{app_name}}\n")
            .unwrap();
        assert_eq!(
            rendered,
            "module github.com/example/my-app\n// app: my-app\n"
        );
    }

    #[test]
    fn text_without_placeholders_passes_through() {
        let ctx = TemplateContext::new("a", "b");
        let input = "plain text, no braces";
        assert_eq!(ctx.render_str(input).unwrap(), input);
    }

    #[test]
    fn unknown_variable_is_a_hard_failure() {
        let ctx = TemplateContext::new("a", "b");
        assert_eq!(
            ctx.render_str("hello {{ nope }}"),
            Err(DomainError::UnknownVariable {
                name: "nope".into()
            })
        );
    }

    #[test]
    fn unterminated_placeholder_is_a_hard_failure() {
        let ctx = TemplateContext::new("a", "b");
        assert!(matches!(
            ctx.render_str("hello {{ app_name"),
            Err(DomainError::UnterminatedPlaceholder { .. })
        ));
    }

    #[test]
    fn extra_variables_can_be_added() {
        let ctx = TemplateContext::new("a", "b").with_var("port", "8080");
        assert_eq!(ctx.render_str("listen :{{port}}").unwrap(), "listen :8080");
    }

    #[test]
    fn repeated_references_all_substitute() {
        let ctx = TemplateContext::new("x", "m");
        assert_eq!(
            ctx.render_str("{{app_name}}{{app_name}}{{app_name}}").unwrap(),
            "xxx"
        );
    }
}
