use std::fmt;

use serde::Serialize;

/// Coarse expected expression of a marker on the target population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionLevel {
    Low,
    Medium,
    High,
}

impl ExpressionLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ExpressionLevel::Low => "low",
            ExpressionLevel::Medium => "medium",
            ExpressionLevel::High => "high",
        }
    }

    /// Levels that need an FMO control to place the positive gate.
    pub fn needs_fmo(self) -> bool {
        matches!(self, ExpressionLevel::Low | ExpressionLevel::Medium)
    }
}

impl fmt::Display for ExpressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
