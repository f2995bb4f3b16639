//! CVRF bulletin model.
//!
//! The wire types mirror the MSRC CVRF v3 JSON shape and keep every field
//! optional, because real bulletins omit titles, scores and product lists
//! more often than one would hope. Consumers never touch the raw `Option`s:
//! each type exposes accessors with a documented default instead.

use std::collections::BTreeSet;

use serde::Deserialize;

use super::Period;

/// Placeholder used when a bulletin carries no `DocumentTitle`.
pub const NO_TITLE: &str = "[no title]";

/// `{"Value": "..."}` wrapper used throughout CVRF for free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextValue {
    #[serde(rename = "Value", default)]
    pub value: Option<String>,
}

impl TextValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

fn text_or_empty(text: &Option<TextValue>) -> &str {
    text.as_ref()
        .and_then(|t| t.value.as_deref())
        .unwrap_or("")
}

/// Top-level document as returned by `GET /cvrf/{period}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CvrfDocument {
    #[serde(rename = "DocumentTitle", default)]
    pub document_title: Option<TextValue>,
    #[serde(rename = "Vulnerability", default)]
    pub vulnerability: Option<Vec<VulnerabilityRecord>>,
}

/// CVRF threat `Type` codes.
///
/// Only the first two matter for reporting; every other code (impact,
/// severity, ...) is carried as `Other` and ignored by the aggregators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "u32")]
pub enum ThreatKind {
    Vulnerability,
    Exploit,
    Other(u32),
}

impl From<u32> for ThreatKind {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Vulnerability,
            1 => Self::Exploit,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThreatEntry {
    #[serde(rename = "Type", default)]
    pub kind: Option<ThreatKind>,
    #[serde(rename = "Description", default)]
    pub description: Option<TextValue>,
    #[serde(rename = "ProductID", default)]
    pub product_ids: Option<BTreeSet<String>>,
}

impl ThreatEntry {
    pub fn new(kind: ThreatKind, description: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            description: Some(TextValue::new(description)),
            product_ids: None,
        }
    }

    pub fn with_products<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.product_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// `true` only when `Type` is present and equal to `kind`.
    pub fn is(&self, kind: ThreatKind) -> bool {
        self.kind == Some(kind)
    }

    /// Threat text, or `""` when absent.
    pub fn description(&self) -> &str {
        text_or_empty(&self.description)
    }

    pub fn has_product(&self, product_id: &str) -> bool {
        self.product_ids
            .as_ref()
            .is_some_and(|ids| ids.contains(product_id))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct CvssScoreSet {
    #[serde(rename = "BaseScore", default)]
    pub base_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VulnerabilityRecord {
    #[serde(rename = "CVE", default)]
    pub cve: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<TextValue>,
    #[serde(rename = "Threats", default)]
    pub threats: Option<Vec<ThreatEntry>>,
    #[serde(rename = "CVSSScoreSets", default)]
    pub cvss_score_sets: Option<Vec<CvssScoreSet>>,
}

impl VulnerabilityRecord {
    pub fn new(cve: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            cve: Some(cve.into()),
            title: Some(TextValue::new(title)),
            threats: None,
            cvss_score_sets: None,
        }
    }

    pub fn with_threat(mut self, threat: ThreatEntry) -> Self {
        self.threats.get_or_insert_with(Vec::new).push(threat);
        self
    }

    pub fn with_score(mut self, base_score: f64) -> Self {
        self.cvss_score_sets
            .get_or_insert_with(Vec::new)
            .push(CvssScoreSet {
                base_score: Some(base_score),
            });
        self
    }

    /// CVE identifier, or `""` when absent.
    pub fn cve(&self) -> &str {
        self.cve.as_deref().unwrap_or("")
    }

    /// Vulnerability title, or `""` when absent.
    pub fn title(&self) -> &str {
        text_or_empty(&self.title)
    }

    /// Threat entries in document order; empty when absent.
    pub fn threats(&self) -> &[ThreatEntry] {
        self.threats.as_deref().unwrap_or(&[])
    }

    pub fn score_sets(&self) -> &[CvssScoreSet] {
        self.cvss_score_sets.as_deref().unwrap_or(&[])
    }

    /// Base score of the *first* CVSS score set.
    ///
    /// `0.0` when there are no score sets, or when the first one has no
    /// `BaseScore`. Later score sets are never consulted.
    pub fn base_score(&self) -> f64 {
        self.score_sets()
            .first()
            .and_then(|s| s.base_score)
            .unwrap_or(0.0)
    }
}

/// One month's bulletin, immutable once built.
#[derive(Debug, Clone)]
pub struct Bulletin {
    pub title: String,
    pub period: Period,
    pub vulnerabilities: Vec<VulnerabilityRecord>,
}

impl Bulletin {
    pub fn from_document(period: Period, doc: CvrfDocument) -> Self {
        let title = doc
            .document_title
            .and_then(|t| t.value)
            .unwrap_or_else(|| NO_TITLE.to_string());

        Self {
            title,
            period,
            vulnerabilities: doc.vulnerability.unwrap_or_default(),
        }
    }
}
