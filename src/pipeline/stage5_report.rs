use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::report::export::write_panel_csv;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{ReportError, ReportInput};

pub const PANEL_CSV: &str = "panel.csv";
pub const SUMMARY_JSON: &str = "summary.json";
pub const REPORT_TXT: &str = "report.txt";

pub fn write_reports(
    input: &ReportInput<'_>,
    out_dir: &Path,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let panel_csv = out_dir.join(PANEL_CSV);
    let file = BufWriter::new(File::create(&panel_csv)?);
    write_panel_csv(input.panel, file)?;

    let summary_json = out_dir.join(SUMMARY_JSON);
    let json = render_summary_json(input)?;
    write_text(&summary_json, &json)?;

    let report_txt = out_dir.join(REPORT_TXT);
    write_text(&report_txt, &render_report_text(input))?;

    tracing::info!(
        panel = %panel_csv.display(),
        summary = %summary_json.display(),
        report = %report_txt.display(),
        "reports written"
    );
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
