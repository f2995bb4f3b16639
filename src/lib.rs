//! `msrc-report` library crate.
//!
//! The binary (`msrc`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes or hitting the network
//! - the aggregations can be reused on bulletins obtained some other way

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;
pub mod stats;
