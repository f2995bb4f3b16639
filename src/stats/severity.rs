//! High-severity filter.

use crate::domain::VulnerabilityRecord;
use crate::stats::ScoredRow;

pub use crate::domain::DEFAULT_THRESHOLD;

/// Vulnerabilities whose first CVSS base score is `>= threshold`, in input order.
pub fn high_severity(vulns: &[VulnerabilityRecord], threshold: f64) -> Vec<ScoredRow> {
    vulns
        .iter()
        .filter(|v| v.base_score() >= threshold)
        .map(ScoredRow::from_record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        let vulns = vec![
            VulnerabilityRecord::new("CVE-1", "low").with_score(7.9),
            VulnerabilityRecord::new("CVE-2", "edge").with_score(8.0),
            VulnerabilityRecord::new("CVE-3", "crit").with_score(9.8),
        ];
        let rows = high_severity(&vulns, DEFAULT_THRESHOLD);
        let cves: Vec<_> = rows.iter().map(|r| r.cve.as_str()).collect();
        assert_eq!(cves, vec!["CVE-2", "CVE-3"]);
        assert_eq!(rows[1].score, 9.8);
    }

    #[test]
    fn missing_score_is_zero_and_excluded() {
        let vulns = vec![VulnerabilityRecord::new("CVE-1", "unscored")];
        assert!(high_severity(&vulns, DEFAULT_THRESHOLD).is_empty());
        assert_eq!(high_severity(&vulns, 0.0).len(), 1);
    }

    #[test]
    fn only_first_score_set_counts() {
        let v = VulnerabilityRecord::new("CVE-1", "x").with_score(5.0).with_score(9.9);
        assert!(high_severity(&[v], DEFAULT_THRESHOLD).is_empty());
    }
}
