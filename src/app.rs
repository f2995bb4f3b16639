//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - installs logging
//! - parses CLI arguments
//! - runs the fetch/aggregate/write pipeline
//! - prints the console summary

use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::domain::{Period, ReportConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `msrc` binary.
pub fn run() -> Result<(), AppError> {
    crate::logging::init();

    let cli = Cli::parse();
    let config = report_config_from_cli(cli)?;
    info!(period = %config.period, threshold = config.threshold, "starting report");

    let run = pipeline::run_report(&config)?;

    println!("{}", crate::report::format_summary(&run.bulletin, &run.stats));
    println!("Wrote report to {}", run.path.display());
    Ok(())
}

pub fn report_config_from_cli(cli: Cli) -> Result<ReportConfig, AppError> {
    let period = cli.period.unwrap_or_else(Period::current);
    ReportConfig::new(period, cli.threshold, cli.out_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_period_defaults_to_current_month() {
        let cli = Cli::try_parse_from(["msrc"]).unwrap();
        let config = report_config_from_cli(cli).unwrap();
        assert_eq!(config.period, Period::current());
    }

    #[test]
    fn invalid_threshold_is_config_error() {
        let cli = Cli::try_parse_from(["msrc", "--threshold", "11"]).unwrap();
        let err = report_config_from_cli(cli).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
