//! Command-line parsing for the MSRC bulletin reporter.
//!
//! Every flag is optional; `msrc` with no arguments reports the current
//! month with the default threshold into the working directory.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{DEFAULT_THRESHOLD, Period};

#[derive(Debug, Parser)]
#[command(
    name = "msrc",
    version,
    about = "Summarize a monthly MSRC security bulletin into an Excel workbook"
)]
pub struct Cli {
    /// Bulletin month as YYYY-MMM (e.g. 2024-Jan). Defaults to the current month.
    #[arg(long, value_name = "YYYY-MMM")]
    pub period: Option<Period>,

    /// Minimum CVSS base score for the "High Severity" sheet.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Directory to write MSRC_<period>.xlsx into.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,
}
