//! Shared building blocks for the log analyzer: errors, date normalisation,
//! record and statistics models, CLI settings, and plain-text rendering.

pub mod dates;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod table;
