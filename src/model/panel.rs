use serde::Serialize;

use crate::model::expression::ExpressionLevel;

/// One row of the staining panel. `fluorochrome` is `None` once the catalog
/// is exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelEntry {
    pub marker: String,
    pub expression: ExpressionLevel,
    pub fluorochrome: Option<&'static str>,
}

#[derive(Debug, Clone, Default)]
pub struct Panel {
    pub entries: Vec<PanelEntry>,
}

impl Panel {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn n_assigned(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.fluorochrome.is_some())
            .count()
    }

    pub fn n_unassigned(&self) -> usize {
        self.len() - self.n_assigned()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/panel.rs"]
mod tests;
