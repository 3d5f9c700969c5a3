use serde::Serialize;

use crate::model::expression::ExpressionLevel;

/// A (marker, description) pair as returned by a marker source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMarker {
    pub marker: String,
    pub description: String,
}

impl RawMarker {
    pub fn new(marker: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedMarker {
    pub marker: String,
    pub description: String,
    pub expression: ExpressionLevel,
}
