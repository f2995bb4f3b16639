//! Shared report pipeline:
//! MSRC fetch -> aggregate -> assemble tables -> write workbook

use std::path::PathBuf;

use tracing::info;

use crate::data::MsrcClient;
use crate::domain::{Bulletin, ReportConfig};
use crate::error::AppError;
use crate::report::Report;
use crate::stats::BulletinStats;

/// Everything a single `msrc` run produced.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub bulletin: Bulletin,
    pub stats: BulletinStats,
    pub report: Report,
    pub path: PathBuf,
}

/// Fetch the configured bulletin and write its report.
pub fn run_report(config: &ReportConfig) -> Result<RunOutput, AppError> {
    let client = MsrcClient::from_env()?;
    let bulletin = client.fetch(&config.period)?;

    run_report_with_bulletin(config, bulletin)
}

/// Aggregate and write an already-fetched bulletin.
pub fn run_report_with_bulletin(config: &ReportConfig, bulletin: Bulletin) -> Result<RunOutput, AppError> {
    let stats = BulletinStats::compute(&bulletin, config.threshold);
    let report = crate::report::build_report(&bulletin, &stats);

    let path = config.output_path();
    crate::io::write_report(&path, &report)?;
    info!(path = %path.display(), "report written");

    Ok(RunOutput {
        bulletin,
        stats,
        report,
        path,
    })
}
