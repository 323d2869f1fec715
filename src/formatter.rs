//! Template formatting engine.

use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::config::FormatterConfig;
use crate::error::FormatError;
use crate::request::RenderRequest;
use crate::template::RenderableTemplate;

/// The literal token replaced with a timestamp.
///
/// Substitution is a plain substring replace, not word-boundary-aware: a
/// template containing `nowhere` will have its `now` prefix replaced too.
/// This matches the behavior sites already depend on and is deliberately
/// left as-is.
pub const DATE_TOKEN: &str = "now";

/// External date-rendering capability.
///
/// The host environment owns timezone and locale handling; this crate only
/// asks for an ISO-8601 string for the given offset-aware instant.
pub trait DateFormatter {
    /// Render the date as an ISO-8601 string.
    fn format_iso(&self, date: &DateTime<FixedOffset>) -> Result<String, FormatError>;
}

/// Default date service: RFC 3339 with whole seconds and a numeric offset,
/// e.g. `2024-01-15T10:30:00+00:00` (PHP `date('c')` equivalent).
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDateFormatter;

impl DateFormatter for IsoDateFormatter {
    fn format_iso(&self, date: &DateTime<FixedOffset>) -> Result<String, FormatError> {
        Ok(date.to_rfc3339_opts(SecondsFormat::Secs, false))
    }
}

/// Formats date values through a configured Twig-style template.
///
/// Resolves the effective template, substitutes the [`DATE_TOKEN`] when a
/// date is present, and packages the text for an external engine. Each call
/// is independent; there is no caching.
#[derive(Debug, Clone, Default)]
pub struct TemplateDateFormatter<D = IsoDateFormatter> {
    dates: D,
}

impl TemplateDateFormatter {
    /// A formatter backed by the default ISO date service.
    pub fn new() -> Self {
        TemplateDateFormatter {
            dates: IsoDateFormatter,
        }
    }
}

impl<D: DateFormatter> TemplateDateFormatter<D> {
    /// A formatter backed by a custom date service.
    pub fn with_dates(dates: D) -> Self {
        TemplateDateFormatter { dates }
    }

    /// Format a request using this configuration.
    ///
    /// This is an infallible method: if the date service fails, the
    /// effective template is returned with the token left intact. For
    /// precise error handling use `try_format()` instead.
    pub fn format(&self, config: &FormatterConfig, request: &RenderRequest) -> RenderableTemplate {
        match self.try_format(config, request) {
            Ok(template) => template,
            Err(_) => RenderableTemplate::new(config.effective_template().to_string()),
        }
    }

    /// Try to format a request using this configuration.
    ///
    /// With a date present, every occurrence of [`DATE_TOKEN`] in the
    /// effective template is replaced by the ISO-8601 rendering of that
    /// date. Without one, the effective template passes through unchanged.
    pub fn try_format(
        &self,
        config: &FormatterConfig,
        request: &RenderRequest,
    ) -> Result<RenderableTemplate, FormatError> {
        let effective = config.effective_template();

        let text = match request.date {
            Some(ref date) => {
                let iso = self.dates.format_iso(date)?;
                effective.replace(DATE_TOKEN, &iso)
            }
            None => effective.to_string(),
        };

        Ok(RenderableTemplate::new(text))
    }

    /// Format a multi-value date field.
    ///
    /// Produces one payload per present date, in order. Empty items are
    /// skipped rather than rendered as previews.
    pub fn view_elements(
        &self,
        config: &FormatterConfig,
        items: &[Option<DateTime<FixedOffset>>],
    ) -> Vec<RenderableTemplate> {
        items
            .iter()
            .flatten()
            .map(|date| self.format(config, &RenderRequest::at(*date)))
            .collect()
    }

    /// Settings-summary preview: the effective template with the token
    /// left as literal text.
    pub fn settings_summary(&self, config: &FormatterConfig) -> RenderableTemplate {
        self.format(config, &RenderRequest::preview())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TEMPLATE;

    fn date(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_iso_rendering_matches_php_c_format() {
        let iso = IsoDateFormatter
            .format_iso(&date("2024-01-15T10:30:00Z"))
            .unwrap();
        assert_eq!(iso, "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_iso_rendering_keeps_offset() {
        let iso = IsoDateFormatter
            .format_iso(&date("2024-01-15T10:30:00+05:30"))
            .unwrap();
        assert_eq!(iso, "2024-01-15T10:30:00+05:30");
    }

    #[test]
    fn test_preview_keeps_token_literal() {
        let formatter = TemplateDateFormatter::new();
        let config = FormatterConfig::new("Updated: now");

        let out = formatter.format(&config, &RenderRequest::preview());
        assert_eq!(out.as_str(), "Updated: now");
    }

    #[test]
    fn test_empty_config_preview_is_default_template() {
        let formatter = TemplateDateFormatter::new();
        let config = FormatterConfig::default();

        let out = formatter.format(&config, &RenderRequest::preview());
        assert_eq!(out.as_str(), DEFAULT_TEMPLATE);
    }

    struct FailingDates;

    impl DateFormatter for FailingDates {
        fn format_iso(&self, _: &DateTime<FixedOffset>) -> Result<String, FormatError> {
            Err(FormatError::DateService {
                reason: "unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_format_falls_back_when_date_service_fails() {
        let formatter = TemplateDateFormatter::with_dates(FailingDates);
        let config = FormatterConfig::new("Updated: now");
        let request = RenderRequest::at(date("2024-01-15T10:30:00Z"));

        assert!(formatter.try_format(&config, &request).is_err());
        assert_eq!(formatter.format(&config, &request).as_str(), "Updated: now");
    }
}
