use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TipTier;

/// A single snapshot of the calculator inputs.
///
/// The cost is read once per user action; tip and total are both derived
/// from this snapshot so they can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TipRequest {
    /// Cost of service. `None` when the field is empty or unparseable.
    pub cost: Option<Decimal>,

    /// Selected tier. `None` resolves to the 15% fallback.
    pub tier: Option<TipTier>,

    /// Round the tip up to the next whole currency unit.
    pub round_up: bool,
}

impl TipRequest {
    pub fn new(
        cost: Option<Decimal>,
        tier: Option<TipTier>,
        round_up: bool,
    ) -> Self {
        Self {
            cost,
            tier,
            round_up,
        }
    }
}

/// Derived calculator outputs. Recomputed on every trigger, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TipBreakdown {
    pub tip: Decimal,
    pub total: Decimal,
}

impl TipBreakdown {
    /// The "nothing to compute" result used for missing or zero cost.
    pub const ZERO: TipBreakdown = TipBreakdown {
        tip: Decimal::ZERO,
        total: Decimal::ZERO,
    };
}

impl fmt::Display for TipBreakdown {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "tip {} / total {}", self.tip, self.total)
    }
}
