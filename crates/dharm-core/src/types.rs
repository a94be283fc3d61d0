//! Core types for dharm-core.
//!
//! This module defines the values that cross the normalizer boundary: the
//! [`Fillers`] a caller configures and the [`DateSpan`] it gets back.

use serde::{Deserialize, Serialize};

/// Sentinel written to both ends of a [`DateSpan`] when no pattern matched.
pub const ALERT: &str = "ALERT";

/// Placeholder values substituted for information the input does not carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fillers {
    /// Written to `end` when the input names a single date, not a range.
    #[serde(default = "default_no_date")]
    pub no_date: String,
    /// Month component used when the input has no month.
    #[serde(default = "default_month")]
    pub month: String,
    /// Day component used when the input has no day.
    #[serde(default = "default_day")]
    pub day: String,
}

fn default_no_date() -> String { "NaN".to_string() }
fn default_month() -> String { "00".to_string() }
fn default_day() -> String { "00".to_string() }

impl Default for Fillers {
    fn default() -> Self {
        Self {
            no_date: default_no_date(),
            month: default_month(),
            day: default_day(),
        }
    }
}

impl Fillers {
    pub fn no_date(mut self, value: impl Into<String>) -> Self {
        self.no_date = value.into();
        self
    }

    pub fn month(mut self, value: impl Into<String>) -> Self {
        self.month = value.into();
        self
    }

    pub fn day(mut self, value: impl Into<String>) -> Self {
        self.day = value.into();
        self
    }
}

/// Result of converting one date cell.
///
/// Each end is either a `YYYY-MM-DD`-shaped string (month and day may be
/// filler values such as `00`), the configured no-date sentinel, or
/// [`ALERT`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: String,
    pub end: String,
}

impl DateSpan {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// A single date: `end` carries the no-date sentinel.
    pub fn single(start: impl Into<String>, fillers: &Fillers) -> Self {
        Self::new(start, fillers.no_date.clone())
    }

    /// The unrecognised-input pair `("ALERT", "ALERT")`.
    pub fn alert() -> Self {
        Self::new(ALERT, ALERT)
    }

    pub fn is_alert(&self) -> bool {
        self.start == ALERT && self.end == ALERT
    }
}

impl From<DateSpan> for (String, String) {
    fn from(span: DateSpan) -> Self {
        (span.start, span.end)
    }
}

impl std::fmt::Display for DateSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_fillers() {
        let f = Fillers::default();
        assert_eq!(f.no_date, "NaN");
        assert_eq!(f.month, "00");
        assert_eq!(f.day, "00");
    }

    #[test]
    fn single_uses_no_date_sentinel() {
        let f = Fillers::default().no_date("N/A");
        assert_eq!(DateSpan::single("1990-05-05", &f), DateSpan::new("1990-05-05", "N/A"));
    }

    #[test]
    fn alert_round_trips_through_tuple() {
        let span = DateSpan::alert();
        assert!(span.is_alert());
        let (start, end): (String, String) = span.into();
        assert_eq!((start.as_str(), end.as_str()), (ALERT, ALERT));
    }

    #[test]
    fn half_alert_is_not_alert() {
        assert!(!DateSpan::new(ALERT, "NaN").is_alert());
    }
}
