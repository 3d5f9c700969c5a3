use crate::model::{ExpressionLevel, Fluorochrome};

#[derive(Debug, Clone, Copy)]
pub struct ExpressionDef {
    pub marker: &'static str,
    pub level: ExpressionLevel,
}

/// Level assumed for markers missing from the reference table.
pub const DEFAULT_EXPRESSION: ExpressionLevel = ExpressionLevel::Medium;

const EXPRESSION_REFERENCE: &[ExpressionDef] = &[
    ExpressionDef {
        marker: "CD3",
        level: ExpressionLevel::High,
    },
    ExpressionDef {
        marker: "CD4",
        level: ExpressionLevel::High,
    },
    ExpressionDef {
        marker: "CD8",
        level: ExpressionLevel::High,
    },
    ExpressionDef {
        marker: "CD19",
        level: ExpressionLevel::High,
    },
    ExpressionDef {
        marker: "CD56",
        level: ExpressionLevel::Medium,
    },
    ExpressionDef {
        marker: "CD14",
        level: ExpressionLevel::High,
    },
    ExpressionDef {
        marker: "HLA-DR",
        level: ExpressionLevel::Medium,
    },
    ExpressionDef {
        marker: "CD123",
        level: ExpressionLevel::Medium,
    },
    ExpressionDef {
        marker: "CD11c",
        level: ExpressionLevel::Low,
    },
    ExpressionDef {
        marker: "CD25",
        level: ExpressionLevel::Medium,
    },
    ExpressionDef {
        marker: "FoxP3",
        level: ExpressionLevel::Low,
    },
    ExpressionDef {
        marker: "PD-1",
        level: ExpressionLevel::Low,
    },
];

// Enumeration order is the tie-break order of the assigner.
const FLUOROCHROME_CATALOG: &[Fluorochrome] = &[
    Fluorochrome {
        name: "PE",
        brightness: 10,
    },
    Fluorochrome {
        name: "APC",
        brightness: 9,
    },
    Fluorochrome {
        name: "BV421",
        brightness: 8,
    },
    Fluorochrome {
        name: "BUV737",
        brightness: 8,
    },
    Fluorochrome {
        name: "BV510",
        brightness: 7,
    },
    Fluorochrome {
        name: "BUV395",
        brightness: 7,
    },
    Fluorochrome {
        name: "FITC",
        brightness: 4,
    },
    Fluorochrome {
        name: "PerCP-Cy5.5",
        brightness: 3,
    },
    Fluorochrome {
        name: "APC-Cy7",
        brightness: 6,
    },
    Fluorochrome {
        name: "PE-Cy7",
        brightness: 6,
    },
    Fluorochrome {
        name: "AF700",
        brightness: 5,
    },
    Fluorochrome {
        name: "BV605",
        brightness: 6,
    },
    Fluorochrome {
        name: "BV650",
        brightness: 6,
    },
    Fluorochrome {
        name: "BV786",
        brightness: 5,
    },
    Fluorochrome {
        name: "BB515",
        brightness: 4,
    },
    Fluorochrome {
        name: "Zombie Aqua",
        brightness: 10,
    },
];

const GATING_STRATEGY: &[&str] = &[
    "1. Live/Dead gating to exclude dead cells.",
    "2. FSC vs SSC to gate lymphocytes or monocytes.",
    "3. CD45+ gating for leukocyte lineage.",
    "4. Lineage gating (e.g., CD3, CD4/CD8, CD19).",
    "5. Subset-specific gates (activation markers, cytokines, etc.).",
];

pub const COMPENSATION_GUIDANCE: &str =
    "Use single-stained controls for each fluorochrome to generate compensation matrix.";

pub fn expression_reference() -> &'static [ExpressionDef] {
    EXPRESSION_REFERENCE
}

pub fn fluorochrome_catalog() -> &'static [Fluorochrome] {
    FLUOROCHROME_CATALOG
}

pub fn gating_strategy_steps() -> &'static [&'static str] {
    GATING_STRATEGY
}
