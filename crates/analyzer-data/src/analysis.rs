//! Top-level analysis pipeline.
//!
//! Ingests the configured files, then either prints the selected report or a
//! "no data" notice when nothing survived ingestion.

use std::io::Write;

use analyzer_core::error::Result;
use analyzer_core::settings::Settings;
use tracing::info;

use crate::reader::{ingest, IngestStats};
use crate::report::build_report;

/// Printed instead of a report when no records survive ingestion.
pub const NO_DATA_MESSAGE: &str = "No data found";

/// What a run of [`run_analysis`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// A report was printed.
    Report { records: usize, stats: IngestStats },
    /// No records survived ingestion; only the notice was printed.
    NoData { stats: IngestStats },
}

/// Run the full pipeline described by `settings`, writing diagnostics and the
/// report to `out`.
///
/// 1. Ingest `settings.files`, honouring `settings.date`.
/// 2. Print [`NO_DATA_MESSAGE`] and stop if nothing was kept.
/// 3. Print `Report <name>` when a name was given.
/// 4. Print the selected report.
///
/// Unreadable files never fail the run; only a failure to write to `out` does.
pub fn run_analysis<W: Write>(settings: &Settings, out: &mut W) -> Result<AnalysisOutcome> {
    let ingested = ingest(settings.files.as_slice(), settings.date.as_ref(), out);

    if ingested.records.is_empty() {
        info!("No records left after ingestion");
        writeln!(out, "{}", NO_DATA_MESSAGE)?;
        return Ok(AnalysisOutcome::NoData {
            stats: ingested.stats,
        });
    }

    if let Some(name) = &settings.name {
        writeln!(out, "Report {}", name)?;
    }

    info!(
        "Building {} report from {} records",
        settings.report,
        ingested.records.len()
    );
    let table = build_report(settings.report, &ingested.records);
    writeln!(out, "{}", table)?;

    Ok(AnalysisOutcome::Report {
        records: ingested.records.len(),
        stats: ingested.stats,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
