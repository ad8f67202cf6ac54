use serde::Deserialize;
use serde_json::{Map, Value};

/// Key holding the ISO-8601 time the request was logged.
pub const TIMESTAMP_KEY: &str = "@timestamp";
/// Key holding the request endpoint.
pub const URL_KEY: &str = "url";
/// Key holding the request duration.
pub const RESPONSE_TIME_KEY: &str = "response_time";

/// One parsed line of a newline-delimited JSON log.
///
/// Only `@timestamp`, `url` and `response_time` are interpreted; other fields
/// are ignored. Deserializing anything but a JSON object fails.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct LogRecord(Map<String, Value>);

impl LogRecord {
    /// The `@timestamp` field, when it is a string.
    pub fn timestamp(&self) -> Option<&str> {
        self.0.get(TIMESTAMP_KEY).and_then(Value::as_str)
    }

    /// The `url` field, when it is a non-empty string.
    pub fn url(&self) -> Option<&str> {
        self.0
            .get(URL_KEY)
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }

    /// The `response_time` field, when it is a non-zero number.
    pub fn response_time(&self) -> Option<f64> {
        self.0
            .get(RESPONSE_TIME_KEY)
            .and_then(Value::as_f64)
            .filter(|t| *t != 0.0)
    }

    /// The `(url, response_time)` pair a report can aggregate, or `None` when
    /// either part is missing or falsy.
    pub fn timing(&self) -> Option<(&str, f64)> {
        Some((self.url()?, self.response_time()?))
    }
}

// ── EndpointStats ─────────────────────────────────────────────────────────────

/// Running totals for a single endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EndpointStats {
    pub count: u64,
    pub total_time: f64,
}

impl EndpointStats {
    /// Fold one request duration into the totals.
    pub fn add(&mut self, response_time: f64) {
        self.count += 1;
        self.total_time += response_time;
    }

    /// Combine totals gathered separately for the same endpoint.
    pub fn merge(&mut self, other: &EndpointStats) {
        self.count += other.count;
        self.total_time += other.total_time;
    }

    /// Unrounded mean response time; `None` before the first sample.
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total_time / self.count as f64)
    }
}

// ── ReportRow ─────────────────────────────────────────────────────────────────

/// One line of the average-response-time report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub endpoint: String,
    pub count: u64,
    /// Mean response time rounded to three decimal places.
    pub average_response_time: f64,
}

// ── ReportKind ────────────────────────────────────────────────────────────────

/// Reports the analyzer knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportKind {
    /// Request count and mean response time per endpoint.
    Average,
}

impl ReportKind {
    /// The name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ReportKind::Average => "average",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
