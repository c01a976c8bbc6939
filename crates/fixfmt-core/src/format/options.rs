//! Formatter options. Every combination is a valid configuration.

use serde::{Deserialize, Serialize};

/// When to insert grouping separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingStrategy {
    /// Follow the locale's minimum grouping digits.
    #[default]
    Auto,
    /// Never group.
    Never,
    /// Group as soon as the integer part is longer than the primary size.
    Always,
    /// Group only when the top group would hold at least two digits.
    Min2,
}

/// When to render a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignDisplay {
    /// Minus sign on negative values, including negative zero.
    #[default]
    Auto,
    /// No sign at all.
    Never,
    /// Plus on zero and positive values, minus on negative ones.
    Always,
    /// A sign on every nonzero value, none on zero.
    ExceptZero,
    /// Minus on negative nonzero values only.
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedDecimalFormatOptions {
    pub grouping_strategy: GroupingStrategy,
    pub sign_display: SignDisplay,
}
