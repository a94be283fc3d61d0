//! Normalizer — converts one raw date cell into a [`DateSpan`].
//!
//! Patterns are tried in table order against the whole input; the first match
//! is final. When the table is exhausted the result is the
//! [`ALERT`](crate::ALERT) pair.

use regex::Captures;

use crate::error::{Error, Result};
use crate::patterns::{patterns, PatternId};
use crate::types::{DateSpan, Fillers};

fn first_match(input: &str) -> Option<(PatternId, Captures<'_>)> {
    patterns()
        .iter()
        .find_map(|rule| rule.captures(input).map(|caps| (rule.id(), caps)))
}

/// A converted cell together with the entry that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// `None` when the input matched nothing and `span` is the alert pair.
    pub pattern: Option<PatternId>,
    pub span: DateSpan,
}

/// The table entry that governs `input`, or `None` if nothing matches.
pub fn classify(input: &str) -> Option<PatternId> {
    first_match(input).map(|(id, _)| id)
}

/// Convert `input` and report which entry matched.
pub fn normalize(input: &str, fillers: &Fillers) -> Conversion {
    match first_match(input) {
        Some((id, caps)) => Conversion {
            pattern: Some(id),
            span: id.format(&caps, fillers),
        },
        None => Conversion {
            pattern: None,
            span: DateSpan::alert(),
        },
    }
}

/// Convert `input` to a start/end pair.
///
/// Never fails: unrecognised input yields `("ALERT", "ALERT")`.
///
/// ```
/// use dharm_core::{convert, DateSpan, Fillers};
///
/// let span = convert("1990-Summer", &Fillers::default());
/// assert_eq!(span, DateSpan::new("1990-07-00", "1990-09-00"));
/// ```
pub fn convert(input: &str, fillers: &Fillers) -> DateSpan {
    normalize(input, fillers).span
}

/// Like [`convert`], but reports unrecognised input as
/// [`Error::Unrecognized`] instead of the sentinel pair.
pub fn try_convert(input: &str, fillers: &Fillers) -> Result<DateSpan> {
    let (id, caps) = first_match(input).ok_or_else(|| Error::Unrecognized {
        input: input.to_string(),
    })?;
    Ok(id.format(&caps, fillers))
}
