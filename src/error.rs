use std::path::PathBuf;

use thiserror::Error;

/// Every failure the `msrc` binary can report.
///
/// All variants are fatal: `main` prints the message and exits with
/// [`AppError::exit_code`]. Missing optional fields inside a bulletin are
/// defaulted by the domain accessors and never surface here.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Invalid CLI input or environment configuration.
    #[error("{0}")]
    Config(String),

    /// The bulletin endpoint answered with a non-success status.
    #[error("[!] HTTP {status} - no data for {period}")]
    Retrieval { period: String, status: u16 },

    /// The request never produced a response (DNS, connect, body read).
    #[error("[!] Request for {period} failed: {message}")]
    Transport { period: String, message: String },

    /// The response body is not a CVRF document.
    #[error("[!] Malformed bulletin for {period}: {message}")]
    Format { period: String, message: String },

    #[error("Failed to write report '{}': {message}", path.display())]
    Write { path: PathBuf, message: String },
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Retrieval { .. } | Self::Transport { .. } | Self::Format { .. } => 3,
            Self::Write { .. } => 4,
        }
    }
}
