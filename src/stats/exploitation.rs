//! Exploitation-status extractors.
//!
//! Both scan a vulnerability's Exploit threats in order and stop at the
//! first hit, so a vulnerability yields at most one row.
//!
//! The two markers are matched differently: `Exploited:Yes` is a
//! case-sensitive substring, while "exploitation more likely" is compared
//! against the lower-cased description.

use crate::domain::{ThreatKind, VulnerabilityRecord};
use crate::stats::{ScoredRow, TitledRow};

pub const EXPLOITED_MARKER: &str = "Exploited:Yes";
pub const LIKELY_MARKER: &str = "exploitation more likely";

fn has_exploit_threat(vuln: &VulnerabilityRecord, matches: impl Fn(&str) -> bool) -> bool {
    vuln.threats()
        .iter()
        .filter(|t| t.is(ThreatKind::Exploit))
        .any(|t| matches(t.description()))
}

/// Vulnerabilities reported as exploited in the wild.
pub fn exploited_in_wild(vulns: &[VulnerabilityRecord]) -> Vec<ScoredRow> {
    vulns
        .iter()
        .filter(|v| has_exploit_threat(v, |d| d.contains(EXPLOITED_MARKER)))
        .map(ScoredRow::from_record)
        .collect()
}

/// Vulnerabilities assessed as "Exploitation More Likely".
pub fn likely_exploited(vulns: &[VulnerabilityRecord]) -> Vec<TitledRow> {
    vulns
        .iter()
        .filter(|v| has_exploit_threat(v, |d| d.to_lowercase().contains(LIKELY_MARKER)))
        .map(TitledRow::from_record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ThreatEntry;

    fn exploit(desc: &str) -> ThreatEntry {
        ThreatEntry::new(ThreatKind::Exploit, desc)
    }

    #[test]
    fn exploited_marker_found_in_second_entry_emits_one_row() {
        let v = VulnerabilityRecord::new("CVE-2024-1", "Kernel")
            .with_score(7.8)
            .with_threat(exploit("Publicly Disclosed:No;Exploited:No;Latest Software Release:Exploitation Less Likely"))
            .with_threat(exploit("Publicly Disclosed:No;Exploited:Yes"))
            .with_threat(exploit("Exploited:Yes"));

        let rows = exploited_in_wild(&[v]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cve, "CVE-2024-1");
        assert_eq!(rows[0].score, 7.8);
        assert_eq!(rows[0].title, "Kernel");
    }

    #[test]
    fn exploited_marker_is_case_sensitive() {
        let v = VulnerabilityRecord::new("CVE-2024-1", "Kernel").with_threat(exploit("Exploited:yes"));
        assert!(exploited_in_wild(&[v]).is_empty());
    }

    #[test]
    fn exploited_marker_ignored_on_non_exploit_threats() {
        let v = VulnerabilityRecord::new("CVE-2024-1", "Kernel")
            .with_threat(ThreatEntry::new(ThreatKind::Vulnerability, "Exploited:Yes"));
        assert!(exploited_in_wild(&[v]).is_empty());
    }

    #[test]
    fn exploited_without_scores_reports_zero() {
        let v = VulnerabilityRecord::new("CVE-2024-1", "Kernel").with_threat(exploit("Exploited:Yes"));
        assert_eq!(exploited_in_wild(&[v])[0].score, 0.0);
    }

    #[test]
    fn likely_marker_is_case_insensitive() {
        let upper = VulnerabilityRecord::new("CVE-1", "a").with_threat(exploit("EXPLOITATION MORE LIKELY"));
        let mixed = VulnerabilityRecord::new("CVE-2", "b")
            .with_threat(exploit("Latest Software Release:Exploitation More Likely"))
            .with_threat(exploit("Older Software Release:Exploitation More Likely"));
        let less = VulnerabilityRecord::new("CVE-3", "c").with_threat(exploit("Exploitation Less Likely"));

        let rows = likely_exploited(&[upper, mixed, less]);
        let cves: Vec<_> = rows.iter().map(|r| r.cve.as_str()).collect();
        assert_eq!(cves, vec!["CVE-1", "CVE-2"]);
    }

    #[test]
    fn preserves_input_order() {
        let vulns: Vec<_> = ["CVE-3", "CVE-1", "CVE-2"]
            .into_iter()
            .map(|id| VulnerabilityRecord::new(id, "t").with_threat(exploit("Exploited:Yes")))
            .collect();
        let cves: Vec<_> = exploited_in_wild(&vulns).into_iter().map(|r| r.cve).collect();
        assert_eq!(cves, vec!["CVE-3", "CVE-1", "CVE-2"]);
    }
}
