//! Console summary printed after the workbook is written.

use crate::domain::Bulletin;
use crate::stats::BulletinStats;

pub fn format_summary(bulletin: &Bulletin, stats: &BulletinStats) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", bulletin.title));
    out.push_str(&format!("Period: {}\n", bulletin.period));
    out.push_str(&format!("Vulnerabilities: {}\n", stats.total));
    out.push_str(&format!("Exploited in wild: {}\n", stats.exploited_in_wild.len()));
    out.push_str(&format!(
        "High severity (>= {:.1}): {}\n",
        stats.threshold,
        stats.high_severity.len()
    ));
    out.push_str(&format!("Exploitation more likely: {}\n", stats.likely_exploited.len()));

    out.push_str("\nBy classification:\n");
    for (classification, count) in stats.classifications.iter() {
        out.push_str(&format!("  {:<24} {:>5}\n", classification.label(), count));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ThreatEntry, ThreatKind, VulnerabilityRecord};

    #[test]
    fn summary_lists_totals_and_every_label() {
        let bulletin = Bulletin {
            title: "April 2024 Security Updates".to_string(),
            period: "2024-Apr".parse().unwrap(),
            vulnerabilities: vec![
                VulnerabilityRecord::new("CVE-1", "x")
                    .with_score(9.0)
                    .with_threat(ThreatEntry::new(ThreatKind::Vulnerability, "Remote Code Execution")),
            ],
        };
        let stats = BulletinStats::compute(&bulletin, 8.0);
        let text = format_summary(&bulletin, &stats);

        assert!(text.starts_with("=== April 2024 Security Updates ===\n"));
        assert!(text.contains("Period: 2024-Apr\n"));
        assert!(text.contains("High severity (>= 8.0): 1\n"));
        assert!(text.contains("Remote Code Execution"));
        assert!(text.contains("Edge - Chromium"));
    }
}
