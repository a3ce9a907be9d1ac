mod report;
mod table;

pub use report::{Report, ReportRow};
pub use table::TableRenderer;

/// One json object per report row, newline separated.
pub fn render_jsonl(report: &Report) -> serde_json::Result<String> {
    let lines = report
        .rows()
        .iter()
        .map(serde_json::to_string)
        .collect::<serde_json::Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}
