//! Remote data sources.

pub mod msrc;

pub use msrc::{ApiConfig, MsrcClient};
