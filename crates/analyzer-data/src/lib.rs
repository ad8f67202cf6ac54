//! Data layer for the log analyzer.
//!
//! Reads newline-delimited JSON logs, aggregates response times per endpoint,
//! builds reports and runs the top-level analysis pipeline.

pub mod aggregator;
pub mod analysis;
pub mod reader;
pub mod report;
