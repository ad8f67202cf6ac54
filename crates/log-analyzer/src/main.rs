mod bootstrap;

use std::io::Write;

use analyzer_core::settings::Settings;
use analyzer_data::analysis::{run_analysis, AnalysisOutcome};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // Invalid arguments (including a bad --date) exit here, before any file
    // is opened.
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("log-analyzer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Report: {}, files: {}, date: {}",
        settings.report,
        settings.files.len(),
        settings
            .date
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "any".to_string())
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run_analysis(&settings, &mut out)? {
        AnalysisOutcome::Report { records, stats } => {
            tracing::debug!("Reported on {} records ({:?})", records, stats);
        }
        AnalysisOutcome::NoData { stats } => {
            tracing::debug!("Nothing to report ({:?})", stats);
        }
    }

    out.flush()?;
    Ok(())
}
