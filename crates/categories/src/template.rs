//! Rewrite templates with a single validated `{target}` placeholder.

use thiserror::Error;

/// Placeholder substituted with the trimmed user text when a template renders.
pub const PLACEHOLDER: &str = "{target}";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template is missing the {{target}} placeholder: {0}")]
    MissingPlaceholder(String),

    #[error("Template contains more than one {{target}} placeholder: {0}")]
    DuplicatePlaceholder(String),
}

/// A rewrite format string holding exactly one `{target}` placeholder.
///
/// Validated at construction so a missing substitution cannot surface at
/// request time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    format: String,
}

impl Template {
    pub fn new(format: impl Into<String>) -> Result<Self, TemplateError> {
        let format = format.into();
        match format.matches(PLACEHOLDER).count() {
            0 => Err(TemplateError::MissingPlaceholder(format)),
            1 => Ok(Self { format }),
            _ => Err(TemplateError::DuplicatePlaceholder(format)),
        }
    }

    /// Substitutes `target` into the placeholder.
    pub fn render(&self, target: &str) -> String {
        self.format.replacen(PLACEHOLDER, target, 1)
    }

    pub fn as_str(&self) -> &str {
        &self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: construction rejects formats without exactly one placeholder.**
    #[test]
    fn new_validates_placeholder_count() {
        assert!(Template::new("Define {target}.").is_ok());
        assert_eq!(
            Template::new("Define it."),
            Err(TemplateError::MissingPlaceholder("Define it.".to_string()))
        );
        assert_eq!(
            Template::new("{target} vs {target}"),
            Err(TemplateError::DuplicatePlaceholder(
                "{target} vs {target}".to_string()
            ))
        );
    }

    /// **Test: render substitutes the target text into the placeholder.**
    #[test]
    fn render_substitutes_target() {
        let t = Template::new("Give a concise definition of {target}.").unwrap();
        assert_eq!(
            t.render("entropy"),
            "Give a concise definition of entropy."
        );
    }
}
