//! twigdate - token-substituting date template formatter
//!
//! This crate resolves a user-configured Twig-style template string,
//! substitutes the literal token `now` with an ISO-8601 timestamp when a
//! date is supplied, and packages the result as an opaque template payload
//! for an external templating engine to render. The template syntax itself
//! is never parsed or evaluated here.

pub mod config;
pub mod error;
pub mod formatter;
pub mod request;
pub mod template;

pub use config::{FormatterConfig, DEFAULT_TEMPLATE};
pub use error::FormatError;
pub use formatter::{DateFormatter, IsoDateFormatter, TemplateDateFormatter, DATE_TOKEN};
pub use request::RenderRequest;
pub use template::RenderableTemplate;
