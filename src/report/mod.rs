pub mod export;
pub mod json;
pub mod text;

use crate::model::Panel;
use crate::pipeline::stage4_advisory::Advisory;

pub const NO_MARKERS_MESSAGE: &str = "No markers found for that cell type.";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub tool_name: String,
    pub tool_version: String,
    pub cell_type: &'a str,
    pub source: &'a str,
    pub panel: &'a Panel,
    pub advisory: &'a Advisory,
}

pub fn format_fluorochrome(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

pub fn join_fmo(markers: &[String]) -> String {
    if markers.is_empty() {
        return "(none)".to_string();
    }
    markers.join(", ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
