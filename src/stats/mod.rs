//! Bulletin aggregations.
//!
//! Four independent passes over the same read-only vulnerability list:
//!
//! - `classification`: vulnerabilities per impact label
//! - `exploitation`: exploited-in-the-wild and exploitation-more-likely lists
//! - `severity`: CVSS threshold filter

pub mod classification;
pub mod exploitation;
pub mod severity;

use tracing::debug;

use crate::domain::{Bulletin, VulnerabilityRecord};

pub use classification::{Classification, ClassificationCounts};

/// `{CVE, Score, Title}` row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRow {
    pub cve: String,
    pub score: f64,
    pub title: String,
}

impl ScoredRow {
    pub fn from_record(vuln: &VulnerabilityRecord) -> Self {
        Self {
            cve: vuln.cve().to_string(),
            score: vuln.base_score(),
            title: vuln.title().to_string(),
        }
    }
}

/// `{CVE, Title}` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitledRow {
    pub cve: String,
    pub title: String,
}

impl TitledRow {
    pub fn from_record(vuln: &VulnerabilityRecord) -> Self {
        Self {
            cve: vuln.cve().to_string(),
            title: vuln.title().to_string(),
        }
    }
}

/// All aggregator outputs for one bulletin.
#[derive(Debug, Clone)]
pub struct BulletinStats {
    pub total: usize,
    pub classifications: ClassificationCounts,
    pub exploited_in_wild: Vec<ScoredRow>,
    /// Cut-off used for `high_severity`.
    pub threshold: f64,
    pub high_severity: Vec<ScoredRow>,
    pub likely_exploited: Vec<TitledRow>,
}

impl BulletinStats {
    pub fn compute(bulletin: &Bulletin, threshold: f64) -> Self {
        let vulns = &bulletin.vulnerabilities;
        let stats = Self {
            total: vulns.len(),
            classifications: classification::count(vulns),
            exploited_in_wild: exploitation::exploited_in_wild(vulns),
            threshold,
            high_severity: severity::high_severity(vulns, threshold),
            likely_exploited: exploitation::likely_exploited(vulns),
        };
        debug!(
            total = stats.total,
            exploited = stats.exploited_in_wild.len(),
            high = stats.high_severity.len(),
            likely = stats.likely_exploited.len(),
            "aggregated bulletin"
        );
        stats
    }
}
