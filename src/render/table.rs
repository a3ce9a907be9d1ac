use std::collections::BTreeMap;

use comfy_table::{presets, ContentArrangement, Table};

use super::{Report, ReportRow};
use crate::cli::TableStyle;
use crate::sniff::ValueKind;

pub struct TableRenderer {
    style: TableStyle,
}

impl TableRenderer {
    pub fn new(style: TableStyle) -> Self {
        Self { style }
    }

    pub fn render(&self, report: &Report) -> String {
        if report.is_empty() {
            return String::new();
        }

        let mut table = self.table();
        table.set_header(vec!["#", "kind", "empty", "escaped", "bytes", "value"]);
        for row in report.rows() {
            table.add_row(self.cells(row));
        }

        table.to_string()
    }

    pub fn render_summary(&self, summary: &BTreeMap<ValueKind, usize>) -> String {
        if summary.is_empty() {
            return String::new();
        }

        let mut table = self.table();
        table.set_header(vec!["kind", "count"]);
        for (kind, count) in summary {
            table.add_row(vec![kind.to_string(), count.to_string()]);
        }

        table.to_string()
    }

    fn table(&self) -> Table {
        let mut table = Table::new();

        // Apply style
        match self.style {
            TableStyle::Ascii => table.load_preset(presets::ASCII_FULL),
            TableStyle::Rounded => table.load_preset(presets::UTF8_FULL),
            TableStyle::Markdown => table.load_preset(presets::ASCII_MARKDOWN),
            TableStyle::Plain => table.load_preset(presets::NOTHING),
        };

        table.set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    fn cells(&self, row: &ReportRow) -> Vec<String> {
        vec![
            row.record.to_string(),
            row.kind.to_string(),
            flag(row.empty),
            flag(row.escaped),
            row.bytes.to_string(),
            row.preview.clone(),
        ]
    }
}

fn flag(set: bool) -> String {
    let text = if set { "yes" } else { "" };
    text.to_string()
}
