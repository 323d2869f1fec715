//! Error types for date rendering.

use thiserror::Error;

/// Errors that can occur when rendering a date through the date service.
///
/// The formatter's own logic has no failure paths: empty templates fall
/// back to the default and absent dates skip substitution. Only the
/// [`DateFormatter`](crate::DateFormatter) seam can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("date service failed: {reason}")]
    DateService { reason: String },
}
