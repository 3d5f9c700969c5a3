use crate::model::RawMarker;
use crate::source::{MarkerSource, SourceError};

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub source: String,
    pub markers: Vec<RawMarker>,
}

pub fn run_stage1(source: &dyn MarkerSource, cell_type: &str) -> Result<Stage1Output, SourceError> {
    let markers = source.fetch(cell_type)?;
    tracing::info!(
        source = source.name(),
        cell_type,
        n_markers = markers.len(),
        "marker lookup finished"
    );
    Ok(Stage1Output {
        source: source.name().to_string(),
        markers,
    })
}
