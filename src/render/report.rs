use std::collections::BTreeMap;

use serde::Serialize;

use crate::input::Record;
use crate::sniff::ValueKind;

const PREVIEW_CHARS: usize = 40;

/// What was sniffed about a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub record: usize,
    pub kind: ValueKind,
    pub empty: bool,
    pub escaped: bool,
    pub bytes: usize,
    pub preview: String,
}

impl ReportRow {
    pub fn from_record(record: &Record) -> Self {
        let raw = &record.raw;
        Self {
            record: record.number,
            kind: raw.kind(),
            empty: raw.is_empty_object() || raw.is_empty_array(),
            escaped: raw.is_string() && raw.contains_escape(),
            bytes: raw.len(),
            preview: preview(raw.as_bytes()),
        }
    }
}

fn preview(buf: &[u8]) -> String {
    let text = String::from_utf8_lossy(buf);
    let mut chars = text.chars();
    let mut out: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        out.push_str("...");
    }
    out
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Per-kind counts, in [`ValueKind`] order.
    pub fn summary(&self) -> BTreeMap<ValueKind, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.kind).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::RawJson;

    fn record(number: usize, text: &str) -> Record {
        Record {
            number,
            raw: RawJson::from(text),
        }
    }

    #[test]
    fn test_row_from_record() {
        let row = ReportRow::from_record(&record(3, "[ ]"));
        assert_eq!(row.record, 3);
        assert_eq!(row.kind, ValueKind::Array);
        assert!(row.empty);
        assert!(!row.escaped);
        assert_eq!(row.bytes, 3);
        assert_eq!(row.preview, "[ ]");
    }

    #[test]
    fn test_row_escaped_string() {
        let row = ReportRow::from_record(&record(1, r#""a\tb""#));
        assert_eq!(row.kind, ValueKind::String);
        assert!(row.escaped);
    }

    #[test]
    fn test_preview_truncates() {
        let long = format!("\"{}\"", "x".repeat(100));
        let row = ReportRow::from_record(&record(1, &long));
        assert_eq!(row.preview.chars().count(), PREVIEW_CHARS + 3);
        assert!(row.preview.ends_with("..."));
    }

    #[test]
    fn test_summary_counts() {
        let mut report = Report::new();
        for (i, text) in ["{}", "1", "2", "nope"].iter().enumerate() {
            report.push(ReportRow::from_record(&record(i + 1, text)));
        }
        let summary = report.summary();
        assert_eq!(summary[&ValueKind::Object], 1);
        assert_eq!(summary[&ValueKind::Number], 2);
        assert_eq!(summary[&ValueKind::Unknown], 1);
        assert!(!summary.contains_key(&ValueKind::Null));
    }

    #[test]
    fn test_row_serializes() {
        let row = ReportRow::from_record(&record(2, "null"));
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"record":2,"kind":"null","empty":false,"escaped":false,"bytes":4,"preview":"null"}"#
        );
    }
}
