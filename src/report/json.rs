use serde::Serialize;

use crate::model::PanelEntry;
use crate::report::ReportInput;

#[derive(Debug, Serialize)]
pub struct PanelSummary<'a> {
    pub tool: &'a str,
    pub version: &'a str,
    pub cell_type: &'a str,
    pub source: &'a str,
    pub counts: Counts,
    pub panel: &'a [PanelEntry],
    pub gating_strategy: &'a [String],
    pub fmo_plan: &'a [String],
    pub compensation: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Counts {
    pub markers: usize,
    pub assigned: usize,
    pub unassigned: usize,
}

pub fn build_summary<'a>(input: &'a ReportInput<'_>) -> PanelSummary<'a> {
    PanelSummary {
        tool: &input.tool_name,
        version: &input.tool_version,
        cell_type: input.cell_type,
        source: input.source,
        counts: Counts {
            markers: input.panel.len(),
            assigned: input.panel.n_assigned(),
            unassigned: input.panel.n_unassigned(),
        },
        panel: &input.panel.entries,
        gating_strategy: &input.advisory.gating_strategy,
        fmo_plan: &input.advisory.fmo_plan,
        compensation: &input.advisory.compensation,
    }
}

pub fn render_summary_json(input: &ReportInput<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&build_summary(input))
}
