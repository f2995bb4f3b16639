//! Tracing setup for the `msrc` binary.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// Levels come from `MSRC_LOG` (e.g. `MSRC_LOG=msrc_report=debug`), falling
/// back to warnings only. Output goes to stderr so stdout carries just the
/// report summary. Calling this more than once is a no-op.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("MSRC_LOG")
            .unwrap_or_else(|_| EnvFilter::new("msrc_report=warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
