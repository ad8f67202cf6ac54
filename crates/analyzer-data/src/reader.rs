//! Newline-delimited JSON log ingestion.
//!
//! Reads each file line by line into [`LogRecord`]s. Malformed lines are
//! dropped without comment; a file that cannot be opened or read is reported
//! on the diagnostics writer and skipped, and ingestion moves on to the next
//! file.

use std::io::{BufRead, Write};
use std::path::Path;

use analyzer_core::dates::DateFilter;
use analyzer_core::error::{AnalyzerError, Result};
use analyzer_core::models::LogRecord;
use tracing::{debug, warn};

// ── Public types ──────────────────────────────────────────────────────────────

/// Counters describing one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Files read to the end.
    pub files_read: usize,
    /// Files that could not be opened or failed partway through.
    pub files_failed: usize,
    /// Blank, malformed, or non-object lines.
    pub lines_skipped: usize,
    /// Well-formed records dropped by the date filter.
    pub records_filtered: usize,
}

/// Records collected from all files, in file order then line order.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub records: Vec<LogRecord>,
    pub stats: IngestStats,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every record from `files`, keeping only those logged on `date_filter`
/// when one is given.
///
/// Each unreadable file produces one `Error caused with <path>: <cause>` line
/// on `diagnostics`. Records read from a file before a mid-file failure are
/// kept.
pub fn ingest<P, W>(files: &[P], date_filter: Option<&DateFilter>, diagnostics: &mut W) -> Ingested
where
    P: AsRef<Path>,
    W: Write,
{
    let mut ingested = Ingested::default();

    for file_path in files {
        let file_path = file_path.as_ref();
        match process_single_file(file_path, date_filter, &mut ingested) {
            Ok(()) => ingested.stats.files_read += 1,
            Err(e) => {
                ingested.stats.files_failed += 1;
                warn!("Skipping {}: {}", file_path.display(), e);
                if let Err(write_err) = writeln!(diagnostics, "{}", e) {
                    warn!("Failed to write diagnostic: {}", write_err);
                }
            }
        }
    }

    debug!(
        "Ingested {} records from {} files ({} failed, {} lines skipped, {} filtered by date)",
        ingested.records.len(),
        ingested.stats.files_read,
        ingested.stats.files_failed,
        ingested.stats.lines_skipped,
        ingested.stats.records_filtered,
    );

    ingested
}

/// Parse one log line into a record.
///
/// Returns `None` for blank lines, invalid JSON, and JSON values that are not
/// objects.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str(trimmed) {
        Ok(record) => Some(record),
        Err(e) => {
            debug!("Skipping malformed line: {}", AnalyzerError::from(e));
            None
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Drain a single file into `ingested`.
///
/// The file handle is dropped on return, including when a read fails partway.
fn process_single_file(
    file_path: &Path,
    date_filter: Option<&DateFilter>,
    ingested: &mut Ingested,
) -> Result<()> {
    let to_file_error = |source: std::io::Error| AnalyzerError::FileRead {
        path: file_path.to_path_buf(),
        source,
    };

    let file = std::fs::File::open(file_path).map_err(to_file_error)?;
    let reader = std::io::BufReader::new(file);

    let mut lines_read = 0usize;
    let mut kept = 0usize;

    for line_result in reader.lines() {
        let line = line_result.map_err(to_file_error)?;
        lines_read += 1;

        let Some(record) = parse_line(&line) else {
            ingested.stats.lines_skipped += 1;
            continue;
        };

        if !should_keep(&record, date_filter) {
            ingested.stats.records_filtered += 1;
            continue;
        }

        kept += 1;
        ingested.records.push(record);
    }

    debug!(
        "File {}: {} lines read, {} records kept",
        file_path.display(),
        lines_read,
        kept
    );

    Ok(())
}

/// Returns `true` when `record` passes the optional date filter.
///
/// With a filter active, records lacking a string `@timestamp` are dropped.
fn should_keep(record: &LogRecord, date_filter: Option<&DateFilter>) -> bool {
    match date_filter {
        None => true,
        Some(filter) => record.timestamp().is_some_and(|ts| filter.matches(ts)),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
