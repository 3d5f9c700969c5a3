use crate::catalog::{DEFAULT_EXPRESSION, expression_reference, fluorochrome_catalog};
use crate::model::Panel;
use crate::report::export::CSV_HEADER;
use crate::report::{ReportInput, format_fluorochrome, join_fmo};

pub fn render_report_text(input: &ReportInput<'_>) -> String {
    let mut out = String::new();

    let title = format!("Flow Cytometry Panel: {}", input.cell_type);
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push_str("\n\n");

    out.push_str("1. Fluorochrome assignment\n");
    out.push_str(&render_panel_table(input.panel));
    if input.panel.n_unassigned() > 0 {
        out.push_str(&format!(
            "Note: {} marker(s) left without a fluorochrome; catalog exhausted.\n",
            input.panel.n_unassigned()
        ));
    }
    out.push('\n');

    out.push_str("2. Gating strategy\n");
    for step in &input.advisory.gating_strategy {
        out.push_str(&format!("- {}\n", step));
    }
    out.push('\n');

    out.push_str("3. FMO control suggestions\n");
    out.push_str(&join_fmo(&input.advisory.fmo_plan));
    out.push_str("\n\n");

    out.push_str("4. Compensation guidance\n");
    out.push_str(&input.advisory.compensation);
    out.push('\n');

    out
}

pub fn render_panel_table(panel: &Panel) -> String {
    let rows: Vec<[&str; 3]> = panel
        .entries
        .iter()
        .map(|e| {
            [
                e.marker.as_str(),
                e.expression.as_str(),
                format_fluorochrome(e.fluorochrome),
            ]
        })
        .collect();

    let mut widths = CSV_HEADER.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &CSV_HEADER, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
    let line = format!(
        "{:<w0$}  {:<w1$}  {}",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1]
    );
    out.push_str(line.trim_end());
    out.push('\n');
}

pub fn render_catalog_text() -> String {
    let mut out = String::new();

    out.push_str("Fluorochrome catalog (assignment tie-break order)\n");
    let width = fluorochrome_catalog()
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(0);
    for (idx, fluor) in fluorochrome_catalog().iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<width$}  {}\n",
            idx + 1,
            fluor.name,
            fluor.brightness
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "Expression reference (unlisted markers: {})\n",
        DEFAULT_EXPRESSION
    ));
    for def in expression_reference() {
        out.push_str(&format!("{:<8}{}\n", def.marker, def.level));
    }

    out
}
