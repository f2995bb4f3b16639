//! Per-run report settings.

use std::path::PathBuf;

use crate::domain::Period;
use crate::error::AppError;

/// Default CVSS cut-off for the high-severity table.
pub const DEFAULT_THRESHOLD: f64 = 8.0;

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub period: Period,
    /// Inclusive CVSS base-score cut-off for the high-severity table.
    pub threshold: f64,
    /// Directory the workbook is written into.
    pub out_dir: PathBuf,
}

impl ReportConfig {
    pub fn new(period: Period, threshold: f64, out_dir: PathBuf) -> Result<Self, AppError> {
        if !threshold.is_finite() || !(0.0..=10.0).contains(&threshold) {
            return Err(AppError::config(format!(
                "Invalid threshold {threshold}: CVSS scores range from 0.0 to 10.0."
            )));
        }
        Ok(Self {
            period,
            threshold,
            out_dir,
        })
    }

    /// `<out_dir>/MSRC_<period>.xlsx`
    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(report_file_name(&self.period))
    }
}

pub fn report_file_name(period: &Period) -> String {
    format!("MSRC_{period}.xlsx")
}
