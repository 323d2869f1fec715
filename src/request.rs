//! Render request types.

use chrono::{DateTime, FixedOffset};

/// A single render request: either a concrete point in time or nothing.
///
/// An absent date means preview mode. The token `now` is left as literal
/// text so settings summaries can show the template itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderRequest {
    /// The date to substitute, with its UTC offset. `None` for previews.
    pub date: Option<DateTime<FixedOffset>>,
}

impl RenderRequest {
    /// A request carrying a concrete date.
    pub fn at(date: DateTime<FixedOffset>) -> Self {
        RenderRequest { date: Some(date) }
    }

    /// A preview request with no date.
    pub fn preview() -> Self {
        RenderRequest { date: None }
    }

    /// Returns true if this request carries no date.
    pub fn is_preview(&self) -> bool {
        self.date.is_none()
    }
}

impl From<DateTime<FixedOffset>> for RenderRequest {
    fn from(date: DateTime<FixedOffset>) -> Self {
        RenderRequest::at(date)
    }
}

impl From<Option<DateTime<FixedOffset>>> for RenderRequest {
    fn from(date: Option<DateTime<FixedOffset>>) -> Self {
        RenderRequest { date }
    }
}
