//! Normalisation of user-supplied `--date` values.
//!
//! Accepts `YYYYMMDD` or `YYYY?MM?DD` where `?` is any of `- / : . ;`, and
//! produces the canonical `YYYY-MM-DD` form used to match log timestamps.

use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::error::{AnalyzerError, Result};

/// Canonical output format, also used to parse the normalised string.
const ISO_DATE: &str = "%Y-%m-%d";

fn compact_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{8}$").expect("regex is valid"))
}

fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-/:.;]").expect("regex is valid"))
}

/// Four-digit year, then one- or two-digit month and day.
fn iso_shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("regex is valid"))
}

/// Normalise `input` into a canonical `YYYY-MM-DD` string.
///
/// Returns [`AnalyzerError::InvalidDate`] carrying the original input when the
/// string is not a real calendar date in one of the accepted shapes.
///
/// # Examples
///
/// ```
/// use analyzer_core::dates::normalize_date;
///
/// assert_eq!(normalize_date("20251203").unwrap(), "2025-12-03");
/// assert_eq!(normalize_date("2025/12/03").unwrap(), "2025-12-03");
/// assert!(normalize_date("2025-12-32").is_err());
/// ```
pub fn normalize_date(input: &str) -> Result<String> {
    let candidate = if compact_date_re().is_match(input) {
        format!("{}-{}-{}", &input[..4], &input[4..6], &input[6..])
    } else {
        separator_re().replace_all(input, "-").into_owned()
    };

    // chrono alone would also take short or signed years and stray spaces.
    if !iso_shape_re().is_match(&candidate) {
        debug!("Rejected date {:?} (normalised {:?}): not YYYY-MM-DD", input, candidate);
        return Err(AnalyzerError::InvalidDate(input.to_string()));
    }

    NaiveDate::parse_from_str(&candidate, ISO_DATE)
        .map(|date| date.format(ISO_DATE).to_string())
        .map_err(|e| {
            debug!("Rejected date {:?} (normalised {:?}): {}", input, candidate, e);
            AnalyzerError::InvalidDate(input.to_string())
        })
}

// ── DateFilter ────────────────────────────────────────────────────────────────

/// A validated calendar day used to select log records by `@timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFilter(String);

impl DateFilter {
    /// Build a filter from free-form user input via [`normalize_date`].
    pub fn parse(input: &str) -> Result<Self> {
        normalize_date(input).map(Self)
    }

    /// The canonical `YYYY-MM-DD` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when `timestamp` falls on this day, whatever its time-of-day
    /// suffix.
    pub fn matches(&self, timestamp: &str) -> bool {
        timestamp.starts_with(&self.0)
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for DateFilter {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
