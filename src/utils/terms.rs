//! Terminology Substitution Utilities
use crate::types::*;
use anyhow::Result;

/// Mainland terms which differ in Taiwan, applied after character conversion.
pub const TAIWAN_TERMS: &[(&str, &str)] = &[("激光", "雷射"), ("充值", "儲值")];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// An ordered list of literal substitutions.
pub struct TermTable {
    terms: Vec<(String, String)>,
}

impl TermTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates a table holding the built-in Taiwan terminology.
    pub fn taiwan() -> Self {
        let mut table = Self::new();
        for (source, target) in TAIWAN_TERMS {
            table.push(*source, *target);
        }
        table
    }

    /// Appends a substitution. Substitutions run in insertion order.
    pub fn push<S: Into<String>, T: Into<String>>(&mut self, source: S, target: T) {
        self.terms.push((source.into(), target.into()));
    }

    /// Appends substitutions read from a CSV file with `Source` and `Target` columns.
    /// Rows with an empty cell are skipped.
    pub fn read_csv(&mut self, path: &str) -> Result<()> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)?;
        self.read_csv_from(reader)
    }

    fn read_csv_from<R: std::io::Read>(&mut self, mut reader: csv::Reader<R>) -> Result<()> {
        for result in reader.deserialize() {
            let record: TermTableCell = result?;
            if record.source.is_empty() || record.target.is_empty() {
                continue;
            }
            self.push(record.source, record.target);
        }
        Ok(())
    }

    /// Returns the substitutions in the order they are applied.
    pub fn entries(&self) -> &[(String, String)] {
        &self.terms
    }

    /// Replaces every occurrence of each source term, one term after another.
    pub fn apply(&self, text: &str) -> String {
        let mut text = text.to_owned();
        for (source, target) in self.terms.iter() {
            if text.contains(source.as_str()) {
                text = text.replace(source.as_str(), target);
            }
        }
        text
    }
}

#[test]
fn test_taiwan_terms() {
    let table = TermTable::taiwan();
    assert_eq!(
        table.entries()[0],
        ("激光".to_string(), "雷射".to_string())
    );
    assert_eq!(table.entries().len(), 2);
    assert_eq!(table.apply("充值激光测试"), "儲值雷射测试");
    assert_eq!(table.apply("激光激光"), "雷射雷射");
    assert_eq!(table.apply("无"), "无");
}

#[test]
fn test_taiwan_terms_idempotent() {
    let table = TermTable::taiwan();
    let once = table.apply("激光充值，再充值");
    assert_eq!(table.apply(&once), once);
}

#[test]
fn test_terms_order() {
    let mut table = TermTable::new();
    table.push("ab", "b");
    table.push("bb", "c");
    assert_eq!(table.apply("abb"), "c");
}

#[test]
fn test_read_csv() {
    let data = "Source,Target\n软件,軟體\n,空\n视频,影片\n";
    let mut table = TermTable::taiwan();
    table
        .read_csv_from(
            csv::ReaderBuilder::new()
                .has_headers(true)
                .from_reader(data.as_bytes()),
        )
        .unwrap();
    assert_eq!(table.entries().len(), 4);
    assert_eq!(table.apply("激光软件视频"), "雷射軟體影片");
}
