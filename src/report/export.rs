use std::io::Write;

use serde::Serialize;

use crate::model::Panel;
use crate::report::ReportError;

pub const CSV_HEADER: [&str; 3] = ["Marker", "Expression", "Fluorochrome"];

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    marker: &'a str,
    expression: &'a str,
    fluorochrome: Option<&'a str>,
}

/// Header row plus one row per entry; unassigned markers get an empty field.
pub fn write_panel_csv<W: Write>(panel: &Panel, out: W) -> Result<(), ReportError> {
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);
    w.write_record(CSV_HEADER)?;
    for entry in &panel.entries {
        w.serialize(CsvRow {
            marker: &entry.marker,
            expression: entry.expression.as_str(),
            fluorochrome: entry.fluorochrome,
        })?;
    }
    w.flush()?;
    Ok(())
}

pub fn render_panel_csv(panel: &Panel) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    write_panel_csv(panel, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
