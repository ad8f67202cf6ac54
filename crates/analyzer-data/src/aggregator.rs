//! Per-endpoint response-time aggregation.

use indexmap::IndexMap;

use analyzer_core::formatting::round_to;
use analyzer_core::models::{EndpointStats, LogRecord, ReportRow};

/// Decimal places kept in reported averages.
pub const AVERAGE_PRECISION: u32 = 3;

// ── EndpointAggregator ────────────────────────────────────────────────────────

/// Accumulates request counts and total response time per endpoint.
///
/// Endpoints keep the order in which they were first seen.
#[derive(Debug, Clone, Default)]
pub struct EndpointAggregator {
    stats: IndexMap<String, EndpointStats>,
}

impl EndpointAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate `records` in a single pass.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a LogRecord>) -> Self {
        let mut aggregator = Self::new();
        for record in records {
            aggregator.add_record(record);
        }
        aggregator
    }

    /// Fold `record` in. Returns `false` when it has no usable `url` or
    /// `response_time` and was skipped.
    pub fn add_record(&mut self, record: &LogRecord) -> bool {
        let Some((url, response_time)) = record.timing() else {
            return false;
        };
        self.add(url, response_time);
        true
    }

    /// Record one request against `endpoint`.
    pub fn add(&mut self, endpoint: &str, response_time: f64) {
        match self.stats.get_mut(endpoint) {
            Some(stats) => stats.add(response_time),
            None => {
                let mut stats = EndpointStats::default();
                stats.add(response_time);
                self.stats.insert(endpoint.to_string(), stats);
            }
        }
    }

    /// Combine with totals gathered elsewhere, e.g. from another batch of
    /// files. Endpoints new to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: EndpointAggregator) {
        for (endpoint, stats) in other.stats {
            self.stats.entry(endpoint).or_default().merge(&stats);
        }
    }

    pub fn get(&self, endpoint: &str) -> Option<&EndpointStats> {
        self.stats.get(endpoint)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Convert the totals into report rows, rounding each average to
    /// [`AVERAGE_PRECISION`] places.
    pub fn into_rows(self) -> Vec<ReportRow> {
        self.stats
            .into_iter()
            .filter_map(|(endpoint, stats)| {
                let average = stats.average()?;
                Some(ReportRow {
                    endpoint,
                    count: stats.count,
                    average_response_time: round_to(average, AVERAGE_PRECISION),
                })
            })
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
