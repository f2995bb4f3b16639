//! Report assembly: turns aggregator outputs into named tables.
//!
//! Nothing here touches the filesystem. `io::xlsx` serializes the result,
//! and `format` renders the console summary.

pub mod format;

pub use format::format_summary;

use crate::domain::Bulletin;
use crate::stats::{BulletinStats, ScoredRow, TitledRow};

pub const SHEET_SUMMARY: &str = "Summary";
pub const SHEET_CLASSIFICATION: &str = "By Classification";
pub const SHEET_EXPLOITED: &str = "Exploited in Wild";
pub const SHEET_HIGH_SEVERITY: &str = "High Severity";
pub const SHEET_LIKELY: &str = "Likely Exploited";

/// Extra characters added to the widest cell of each column.
pub const COLUMN_PADDING: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Count(usize),
}

impl Cell {
    /// Text as it appears in the sheet; drives column sizing.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Count(n) => n.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// One sheet: a header row followed by data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(name: &str, headers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.headers.len(), "row width mismatch in {}", self.name);
        self.rows.push(row);
    }

    /// Per-column width: longest header or cell text plus [`COLUMN_PADDING`].
    ///
    /// Lengths are in characters, not bytes, so `≥` or accented titles do
    /// not inflate columns.
    pub fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.display().chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0);
                widest + COLUMN_PADDING
            })
            .collect()
    }
}

/// The full workbook content for one bulletin.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub tables: Vec<Table>,
}

impl Report {
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}

/// Assemble the five report sheets, in workbook order.
pub fn build_report(bulletin: &Bulletin, stats: &BulletinStats) -> Report {
    let mut summary = Table::new(SHEET_SUMMARY, &["Release Title", "Year-Month", "Total Vulns"]);
    summary.push_row(vec![
        bulletin.title.as_str().into(),
        bulletin.period.to_string().into(),
        Cell::Count(stats.total),
    ]);

    let mut by_class = Table::new(SHEET_CLASSIFICATION, &["Classification", "Count"]);
    for (classification, count) in stats.classifications.iter() {
        by_class.push_row(vec![classification.label().into(), Cell::Count(count)]);
    }

    Report {
        tables: vec![
            summary,
            by_class,
            scored_table(SHEET_EXPLOITED, &stats.exploited_in_wild),
            scored_table(SHEET_HIGH_SEVERITY, &stats.high_severity),
            titled_table(SHEET_LIKELY, &stats.likely_exploited),
        ],
    }
}

fn scored_table(name: &str, rows: &[ScoredRow]) -> Table {
    let mut table = Table::new(name, &["CVE", "Score", "Title"]);
    for r in rows {
        table.push_row(vec![r.cve.as_str().into(), Cell::Number(r.score), r.title.as_str().into()]);
    }
    table
}

fn titled_table(name: &str, rows: &[TitledRow]) -> Table {
    let mut table = Table::new(name, &["CVE", "Title"]);
    for r in rows {
        table.push_row(vec![r.cve.as_str().into(), r.title.as_str().into()]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ThreatEntry, ThreatKind, VulnerabilityRecord};
    use crate::stats::severity::DEFAULT_THRESHOLD;

    fn bulletin(vulns: Vec<VulnerabilityRecord>) -> Bulletin {
        Bulletin {
            title: "March 2024 Security Updates".to_string(),
            period: "2024-Mar".parse().unwrap(),
            vulnerabilities: vulns,
        }
    }

    #[test]
    fn empty_bulletin_still_has_every_sheet_and_header() {
        let b = bulletin(vec![]);
        let report = build_report(&b, &BulletinStats::compute(&b, DEFAULT_THRESHOLD));

        let names: Vec<_> = report.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Summary", "By Classification", "Exploited in Wild", "High Severity", "Likely Exploited"]
        );

        let summary = report.table(SHEET_SUMMARY).unwrap();
        assert_eq!(summary.rows[0][2], Cell::Count(0));

        assert_eq!(report.table(SHEET_CLASSIFICATION).unwrap().rows.len(), 7);
        assert_eq!(report.table(SHEET_LIKELY).unwrap().headers, vec!["CVE", "Title"]);
        assert!(report.table(SHEET_EXPLOITED).unwrap().rows.is_empty());
    }

    #[test]
    fn classification_sheet_keeps_label_order() {
        let v = VulnerabilityRecord::new("CVE-1", "x")
            .with_threat(ThreatEntry::new(ThreatKind::Vulnerability, "Spoofing"));
        let b = bulletin(vec![v]);
        let report = build_report(&b, &BulletinStats::compute(&b, DEFAULT_THRESHOLD));

        let table = report.table(SHEET_CLASSIFICATION).unwrap();
        assert_eq!(table.headers, vec!["Classification", "Count"]);
        assert_eq!(table.rows[0][0], Cell::from("Elevation of Privilege"));
        assert_eq!(table.rows[5], vec![Cell::from("Spoofing"), Cell::Count(1)]);
        assert_eq!(table.rows[6][0], Cell::from("Edge - Chromium"));
    }

    #[test]
    fn column_widths_track_widest_cell_plus_padding() {
        let mut table = Table::new("t", &["CVE", "Score", "Title"]);
        table.push_row(vec!["CVE-2024-21412".into(), Cell::Number(8.1), "Short".into()]);
        table.push_row(vec!["CVE-1".into(), Cell::Number(10.0), "A much longer title".into()]);

        assert_eq!(table.column_widths(), vec![14 + 2, 5 + 2, 19 + 2]);
    }

    #[test]
    fn column_widths_count_characters_not_bytes() {
        let mut table = Table::new("t", &["x"]);
        table.push_row(vec!["≥≥≥≥".into()]);
        assert_eq!(table.column_widths(), vec![6]);
    }
}
