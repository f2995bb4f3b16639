//! Output writers.
//!
//! - spreadsheet export (`xlsx`)

pub mod xlsx;

pub use xlsx::write_report;
