use clap::Parser;
use std::path::PathBuf;

use crate::dates::DateFilter;
use crate::models::ReportKind;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summarise newline-delimited JSON access logs
#[derive(Parser, Debug, Clone)]
#[command(
    name = "log-analyzer",
    about = "Summarise newline-delimited JSON access logs",
    version
)]
pub struct Settings {
    /// Report name, printed above the table
    #[arg(long)]
    pub name: Option<String>,

    /// Path(s) to log file(s)
    #[arg(long = "file", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Report type
    #[arg(long, value_enum)]
    pub report: ReportKind,

    /// Only include records logged on this day (YYYY-MM-DD, YYYYMMDD, or with / : . ; separators)
    #[arg(long, value_parser = DateFilter::parse)]
    pub date: Option<DateFilter>,

    /// Logging level
    #[arg(
        long,
        env = "LOG_ANALYZER_LOG_LEVEL",
        default_value = "WARNING",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"],
        ignore_case = true
    )]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long, env = "LOG_ANALYZER_DEBUG")]
    pub debug: bool,
}

impl Settings {
    /// The effective log level: `--debug` wins over `--log-level`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Settings, clap::Error> {
        Settings::try_parse_from(std::iter::once("log-analyzer").chain(args.iter().copied()))
    }

    // ── valid invocations ─────────────────────────────────────────────────────

    #[test]
    fn test_single_file_no_report_name() {
        let settings = parse(&["--file", "f.log", "--report", "average"]).unwrap();
        assert_eq!(settings.files, vec![PathBuf::from("f.log")]);
        assert_eq!(settings.report, ReportKind::Average);
        assert!(settings.name.is_none());
        assert!(settings.date.is_none());
    }

    #[test]
    fn test_multiple_files() {
        let settings = parse(&["--file", "f1.log", "f2.log", "--report", "average"]).unwrap();
        assert_eq!(
            settings.files,
            vec![PathBuf::from("f1.log"), PathBuf::from("f2.log")]
        );
    }

    #[test]
    fn test_arguments_in_any_order_with_name() {
        let settings = parse(&["--name", "test_name", "--report", "average", "--file", "f.log"])
            .unwrap();
        assert_eq!(settings.name.as_deref(), Some("test_name"));
        assert_eq!(settings.files, vec![PathBuf::from("f.log")]);

        let settings = parse(&["--file", "f.log", "--report", "average", "--name", "name_test"])
            .unwrap();
        assert_eq!(settings.name.as_deref(), Some("name_test"));
    }

    #[test]
    fn test_date_is_normalised() {
        let settings = parse(&[
            "--file", "f.log", "--report", "average", "--date", "2025.12.03",
        ])
        .unwrap();
        assert_eq!(settings.date.unwrap().as_str(), "2025-12-03");
    }

    #[test]
    fn test_default_log_level() {
        let settings = parse(&["--file", "f.log", "--report", "average"]).unwrap();
        assert_eq!(settings.log_level, "WARNING");
        assert!(!settings.debug);
        assert_eq!(settings.effective_log_level(), "WARNING");
    }

    #[test]
    fn test_debug_overrides_log_level() {
        let settings = parse(&[
            "--file",
            "f.log",
            "--report",
            "average",
            "--log-level",
            "ERROR",
            "--debug",
        ])
        .unwrap();
        assert_eq!(settings.effective_log_level(), "DEBUG");
    }

    // ── invalid invocations ───────────────────────────────────────────────────

    #[test]
    fn test_missing_file() {
        let err = parse(&["--report", "average"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_missing_report() {
        let err = parse(&["--file", "f.log"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_invalid_report_choice() {
        let err = parse(&["--file", "f.log", "--report", "user_agent"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse(&["--file", "f.log", "--report", "average", "--extra", "user_ids"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_no_arguments() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let err = parse(&[
            "--file", "f.log", "--report", "average", "--date", "2025-12-32",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("2025-12-32"));
    }
}
