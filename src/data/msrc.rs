//! MSRC CVRF API integration.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, info};

use crate::domain::{Bulletin, CvrfDocument, Period};
use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.msrc.microsoft.com/cvrf";
pub const DEFAULT_API_VERSION: &str = "v3.0";

const USER_AGENT: &str = concat!("msrc-report/", env!("CARGO_PKG_VERSION"));

/// Where the bulletins live. Built once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_version: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl ApiConfig {
    /// Defaults, overridden by `MSRC_BASE_URL` / `MSRC_API_VERSION` (a `.env`
    /// file is honoured).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        Self {
            base_url: std::env::var("MSRC_BASE_URL").unwrap_or(defaults.base_url),
            api_version: std::env::var("MSRC_API_VERSION").unwrap_or(defaults.api_version),
        }
    }

    pub fn bulletin_url(&self, period: &Period) -> String {
        format!(
            "{}/{}/cvrf/{period}",
            self.base_url.trim_end_matches('/'),
            self.api_version
        )
    }
}

pub struct MsrcClient {
    client: Client,
    config: ApiConfig,
}

impl MsrcClient {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::new(ApiConfig::from_env())
    }

    /// Fetch and parse the bulletin for `period`.
    ///
    /// Exactly one GET; any non-2xx status is a [`AppError::Retrieval`].
    pub fn fetch(&self, period: &Period) -> Result<Bulletin, AppError> {
        let url = self.config.bulletin_url(period);
        debug!(%url, "requesting bulletin");

        let resp = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| AppError::Transport {
                period: period.to_string(),
                message: e.to_string(),
            })?;

        let status = resp.status();
        info!(%period, status = status.as_u16(), "bulletin response");
        if !status.is_success() {
            return Err(AppError::Retrieval {
                period: period.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().map_err(|e| AppError::Transport {
            period: period.to_string(),
            message: format!("failed to read response body: {e}"),
        })?;

        let doc = parse_document(period, &body)?;
        let bulletin = Bulletin::from_document(*period, doc);
        info!(
            title = %bulletin.title,
            vulnerabilities = bulletin.vulnerabilities.len(),
            "bulletin parsed"
        );
        Ok(bulletin)
    }
}

fn parse_document(period: &Period, body: &str) -> Result<CvrfDocument, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::Format {
        period: period.to_string(),
        message: e.to_string(),
    })
}
