use std::collections::HashSet;

use crate::model::{AnnotatedMarker, ExpressionLevel, Fluorochrome, Panel, PanelEntry};

pub fn run_stage3(markers: &[AnnotatedMarker], catalog: &[Fluorochrome]) -> Panel {
    let panel = assign_fluorochromes(markers, catalog);
    if panel.n_unassigned() > 0 {
        tracing::warn!(
            n_markers = panel.len(),
            catalog_size = catalog.len(),
            n_unassigned = panel.n_unassigned(),
            "fluorochrome catalog exhausted; trailing markers left unassigned"
        );
    } else {
        tracing::info!(n_assigned = panel.n_assigned(), "fluorochromes assigned");
    }
    panel
}

/// Greedy pairing in marker order: dim markers take bright dyes, bright
/// markers take dim dyes, medium markers take dyes near brightness 6.
///
/// Each dye is used at most once. On equal scores the earlier catalog entry
/// wins. Markers processed after the catalog runs out get `None`.
pub fn assign_fluorochromes(markers: &[AnnotatedMarker], catalog: &[Fluorochrome]) -> Panel {
    let mut used: HashSet<&'static str> = HashSet::with_capacity(catalog.len());
    let mut entries = Vec::with_capacity(markers.len());

    for m in markers {
        let mut best: Option<(i32, &'static str)> = None;
        for fluor in catalog {
            if used.contains(fluor.name) {
                continue;
            }
            let score = mismatch_score(m.expression, fluor.brightness);
            if best.is_none_or(|(best_score, _)| score < best_score) {
                best = Some((score, fluor.name));
            }
        }

        let fluorochrome = best.map(|(_, name)| name);
        if let Some(name) = fluorochrome {
            used.insert(name);
        }
        entries.push(PanelEntry {
            marker: m.marker.clone(),
            expression: m.expression,
            fluorochrome,
        });
    }

    Panel { entries }
}

pub fn mismatch_score(expression: ExpressionLevel, brightness: u8) -> i32 {
    let b = i32::from(brightness);
    match expression {
        ExpressionLevel::Low => 10 - b,
        ExpressionLevel::High => b,
        ExpressionLevel::Medium => (6 - b).abs(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_assign.rs"]
mod tests;
