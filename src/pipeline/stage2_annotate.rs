use crate::catalog::{DEFAULT_EXPRESSION, lookup_expression};
use crate::model::{AnnotatedMarker, RawMarker};

pub fn run_stage2(markers: Vec<RawMarker>) -> Vec<AnnotatedMarker> {
    let annotated = annotate_expression(markers);
    let n_defaulted = annotated
        .iter()
        .filter(|m| lookup_expression(&m.marker).is_none())
        .count();
    if n_defaulted > 0 {
        tracing::info!(
            n_defaulted,
            default_level = %DEFAULT_EXPRESSION,
            "markers missing from the expression reference"
        );
    }
    annotated
}

/// Attaches the reference expression level to each marker, keeping order.
pub fn annotate_expression(markers: Vec<RawMarker>) -> Vec<AnnotatedMarker> {
    markers
        .into_iter()
        .map(|raw| {
            let expression = lookup_expression(&raw.marker).unwrap_or(DEFAULT_EXPRESSION);
            AnnotatedMarker {
                marker: raw.marker,
                description: raw.description,
                expression,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_annotate.rs"]
mod tests;
