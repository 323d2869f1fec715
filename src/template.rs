//! Opaque renderable template payload.

use std::fmt;

/// Template text ready for an external templating engine.
///
/// This crate only constructs the text; parsing and rendering belong to the
/// engine. The payload for a given `(config, request)` pair is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderableTemplate(String);

impl RenderableTemplate {
    pub(crate) fn new(text: String) -> Self {
        RenderableTemplate(text)
    }

    /// The template text to hand to the engine.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the payload, returning the template text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderableTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RenderableTemplate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RenderableTemplate> for String {
    fn from(template: RenderableTemplate) -> Self {
        template.0
    }
}
