//! Domain types used throughout the report pipeline.
//!
//! - bulletin periods (`Period`)
//! - the CVRF bulletin model (`Bulletin`, `VulnerabilityRecord`, `ThreatEntry`)
//! - per-run settings (`ReportConfig`)

pub mod bulletin;
pub mod config;
pub mod period;

pub use bulletin::*;
pub use config::*;
pub use period::*;
