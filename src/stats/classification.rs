//! Classification counter.
//!
//! Each vulnerability contributes at most one to any label, no matter how
//! many of its threat entries repeat that label.

use std::collections::BTreeSet;

use crate::domain::{ThreatEntry, ThreatKind, VulnerabilityRecord};

/// Product ID of the Chromium-based Edge browser. Other products reuse the
/// "Edge - Chromium" description, so the label only counts alongside it.
pub const EDGE_CHROMIUM_PRODUCT_ID: &str = "11655";

/// The fixed set of reported classifications, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    ElevationOfPrivilege,
    SecurityFeatureBypass,
    RemoteCodeExecution,
    InformationDisclosure,
    DenialOfService,
    Spoofing,
    EdgeChromium,
}

impl Classification {
    pub const ALL: [Classification; 7] = [
        Classification::ElevationOfPrivilege,
        Classification::SecurityFeatureBypass,
        Classification::RemoteCodeExecution,
        Classification::InformationDisclosure,
        Classification::DenialOfService,
        Classification::Spoofing,
        Classification::EdgeChromium,
    ];

    /// Exact CVRF threat description for this classification.
    pub fn label(self) -> &'static str {
        match self {
            Classification::ElevationOfPrivilege => "Elevation of Privilege",
            Classification::SecurityFeatureBypass => "Security Feature Bypass",
            Classification::RemoteCodeExecution => "Remote Code Execution",
            Classification::InformationDisclosure => "Information Disclosure",
            Classification::DenialOfService => "Denial of Service",
            Classification::Spoofing => "Spoofing",
            Classification::EdgeChromium => "Edge - Chromium",
        }
    }

    /// Exact, case-sensitive match against [`Classification::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Count per classification. Always holds all seven labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationCounts {
    counts: [usize; Classification::ALL.len()],
}

impl ClassificationCounts {
    pub fn get(&self, classification: Classification) -> usize {
        self.counts[classification.index()]
    }

    /// `(classification, count)` pairs in fixed label order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Classification, usize)> + '_ {
        Classification::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    fn credit(&mut self, classification: Classification) {
        self.counts[classification.index()] += 1;
    }
}

/// Classification credited by a single threat entry, if any.
fn threat_classification(threat: &ThreatEntry) -> Option<Classification> {
    if !threat.is(ThreatKind::Vulnerability) {
        return None;
    }
    match Classification::from_label(threat.description())? {
        Classification::EdgeChromium => threat
            .has_product(EDGE_CHROMIUM_PRODUCT_ID)
            .then_some(Classification::EdgeChromium),
        other => Some(other),
    }
}

/// Labels matched by one vulnerability, as a set.
pub fn matched_labels(vuln: &VulnerabilityRecord) -> BTreeSet<Classification> {
    vuln.threats()
        .iter()
        .filter_map(threat_classification)
        .collect()
}

/// Count vulnerabilities per classification.
pub fn count(vulns: &[VulnerabilityRecord]) -> ClassificationCounts {
    let mut counts = ClassificationCounts::default();
    for vuln in vulns {
        for classification in matched_labels(vuln) {
            counts.credit(classification);
        }
    }
    counts
}
