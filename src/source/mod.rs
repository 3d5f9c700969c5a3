use crate::model::RawMarker;

pub mod cellmarker;
pub mod tsv;

pub use cellmarker::CellMarkerSource;
pub use tsv::TsvMarkerSource;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid source URL: {0}")]
    Url(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Anything that can list markers for a cell-type query.
///
/// The returned order is the priority order used when fluorochromes are
/// assigned. An empty list means "no markers found" and is not an error.
pub trait MarkerSource {
    fn name(&self) -> &str;
    fn fetch(&self, cell_type: &str) -> Result<Vec<RawMarker>, SourceError>;
}
