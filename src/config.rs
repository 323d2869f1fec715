//! Formatter configuration.

/// The template applied when no custom template is configured.
///
/// Rendered by the external engine, this produces output like
/// `January 15 - 10:30 a.m.`, with `:00` dropped for on-the-hour times and
/// `midnight`/`noon` substituted for 12 a.m./12 p.m.
pub const DEFAULT_TEMPLATE: &str = r#"{{ "now"|date("F j - g:i a")|replace({"am":"a.m.","pm":"p.m.",":00":""})|replace({"12 a.m.":"midnight","12 p.m.":"noon"}) }}"#;

/// User-supplied formatter configuration.
///
/// The template text is opaque to this crate; it is handed to an external
/// templating engine after token substitution. An empty or whitespace-only
/// template falls back to [`DEFAULT_TEMPLATE`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatterConfig {
    /// The configured template text. May be empty.
    pub template: String,
}

impl FormatterConfig {
    /// Create a configuration from a template string.
    pub fn new(template: impl Into<String>) -> Self {
        FormatterConfig {
            template: template.into(),
        }
    }

    /// Resolve the template used at render time.
    ///
    /// Leading and trailing whitespace is trimmed; if nothing remains,
    /// [`DEFAULT_TEMPLATE`] is returned. The result is never empty.
    pub fn effective_template(&self) -> &str {
        let trimmed = self.template.trim();
        if trimmed.is_empty() {
            DEFAULT_TEMPLATE
        } else {
            trimmed
        }
    }
}

impl From<&str> for FormatterConfig {
    fn from(template: &str) -> Self {
        FormatterConfig::new(template)
    }
}

impl From<String> for FormatterConfig {
    fn from(template: String) -> Self {
        FormatterConfig { template }
    }
}
