//! User-facing label templates for the calculator outputs.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{CurrencyFormat, TipBreakdown};

/// Renders `"Tip Amount: {formatted}"`.
pub fn tip_amount_label(
    format: &CurrencyFormat,
    tip: Decimal,
) -> String {
    format!("Tip Amount: {}", format.format(tip))
}

/// Renders `"Total: {formatted}"`.
pub fn total_label(
    format: &CurrencyFormat,
    total: Decimal,
) -> String {
    format!("Total: {}", format.format(total))
}

/// Both output labels for one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipLabels {
    pub tip: String,
    pub total: String,
}

impl TipLabels {
    pub fn new(
        format: &CurrencyFormat,
        breakdown: &TipBreakdown,
    ) -> Self {
        Self {
            tip: tip_amount_label(format, breakdown.tip),
            total: total_label(format, breakdown.total),
        }
    }
}
