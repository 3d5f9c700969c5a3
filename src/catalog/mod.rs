pub mod defs;

pub use defs::{
    COMPENSATION_GUIDANCE, DEFAULT_EXPRESSION, expression_reference, fluorochrome_catalog,
    gating_strategy_steps,
};

use crate::model::ExpressionLevel;

/// Exact, case-sensitive lookup in the reference table.
pub fn lookup_expression(marker: &str) -> Option<ExpressionLevel> {
    expression_reference()
        .iter()
        .find(|def| def.marker == marker)
        .map(|def| def.level)
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalog/tests.rs"]
mod tests;
