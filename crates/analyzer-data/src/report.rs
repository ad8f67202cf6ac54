//! Report registry and builders.
//!
//! Each [`ReportKind`] maps to one builder turning ingested records into a
//! [`TextTable`].

use analyzer_core::formatting::format_decimal;
use analyzer_core::models::{LogRecord, ReportKind, ReportRow};
use analyzer_core::table::{Column, TextTable};

use crate::aggregator::{EndpointAggregator, AVERAGE_PRECISION};

/// Column headers of the average-response-time report.
pub const AVERAGE_HEADERS: [&str; 3] = ["Endpoint", "Count", "Avg Response Time"];

/// Build the report selected by `kind`.
pub fn build_report(kind: ReportKind, records: &[LogRecord]) -> TextTable {
    match kind {
        ReportKind::Average => build_average_report(records),
    }
}

/// Request count and mean response time per endpoint, in first-seen order.
///
/// An empty `records` slice yields a table with headers and no rows.
pub fn build_average_report(records: &[LogRecord]) -> TextTable {
    average_table(&EndpointAggregator::from_records(records).into_rows())
}

fn average_table(rows: &[ReportRow]) -> TextTable {
    let [endpoint, count, average] = AVERAGE_HEADERS;
    let mut table = TextTable::new(vec![
        Column::text(endpoint),
        Column::numeric(count),
        Column::numeric(average),
    ]);

    for row in rows {
        table.push_row(vec![
            row.endpoint.clone(),
            row.count.to_string(),
            format_decimal(row.average_response_time, AVERAGE_PRECISION),
        ]);
    }

    table
}

// ── Tests ─────────────────────────────────────────────────────────────────────
