use crate::catalog::{COMPENSATION_GUIDANCE, gating_strategy_steps};
use crate::model::AnnotatedMarker;

#[derive(Debug, Clone)]
pub struct Advisory {
    pub gating_strategy: Vec<String>,
    pub fmo_plan: Vec<String>,
    pub compensation: String,
}

pub fn run_stage4(markers: &[AnnotatedMarker]) -> Advisory {
    let advisory = Advisory {
        gating_strategy: generate_gating_strategy(markers),
        fmo_plan: generate_fmo_plan(markers),
        compensation: generate_compensation_guidance(markers),
    };
    tracing::info!(n_fmo = advisory.fmo_plan.len(), "advisory generated");
    advisory
}

/// Canned five-step gating hierarchy; markers do not affect it.
pub fn generate_gating_strategy(_markers: &[AnnotatedMarker]) -> Vec<String> {
    gating_strategy_steps()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Markers whose positive boundary is hard to place without an FMO control.
pub fn generate_fmo_plan(markers: &[AnnotatedMarker]) -> Vec<String> {
    markers
        .iter()
        .filter(|m| m.expression.needs_fmo())
        .map(|m| m.marker.clone())
        .collect()
}

pub fn generate_compensation_guidance(_markers: &[AnnotatedMarker]) -> String {
    COMPENSATION_GUIDANCE.to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_advisory.rs"]
mod tests;
