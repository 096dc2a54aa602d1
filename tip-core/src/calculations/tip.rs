//! Tip and total computation.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::{TipRequest, TipTier, calculate};
//!
//! let request = TipRequest::new(Some(dec!(10.00)), Some(TipTier::FifteenPercent), true);
//! let result = calculate(&request);
//!
//! assert_eq!(result.tip, dec!(2.00));
//! assert_eq!(result.total, dec!(12.00));
//! ```

use rust_decimal::Decimal;
use tracing::{trace, warn};

use crate::calculations::common::round_up_to_whole;
use crate::{TipBreakdown, TipRequest, TipTier};

/// Computes the tip and total for one snapshot of the calculator inputs.
///
/// A missing or zero cost short-circuits to [`TipBreakdown::ZERO`]. The tip is
/// the resolved tier's rate times the cost, rounded up to a whole currency
/// unit when `round_up` is set and kept at full precision otherwise. The
/// total is the cost plus that same tip.
///
/// A cost so large that the tip or total leaves the `Decimal` range is
/// treated like unparseable input and also yields [`TipBreakdown::ZERO`].
pub fn calculate(request: &TipRequest) -> TipBreakdown {
    let cost = match request.cost {
        Some(cost) if !cost.is_zero() => cost,
        _ => return TipBreakdown::ZERO,
    };

    let tier = TipTier::resolve(request.tier);
    let breakdown = tip_amount(cost, tier, request.round_up)
        .and_then(|tip| cost.checked_add(tip).map(|total| TipBreakdown { tip, total }));

    match breakdown {
        Some(breakdown) => {
            trace!(%cost, tier = tier.as_str(), tip = %breakdown.tip, "tip is calculated");
            breakdown
        }
        None => {
            warn!(%cost, tier = tier.as_str(), "cost is out of range; showing zero");
            TipBreakdown::ZERO
        }
    }
}

/// Convenience wrapper over [`calculate`] for callers holding loose values.
pub fn calculate_tip(
    cost: Option<Decimal>,
    tier: Option<TipTier>,
    round_up: bool,
) -> TipBreakdown {
    calculate(&TipRequest::new(cost, tier, round_up))
}

fn tip_amount(
    cost: Decimal,
    tier: TipTier,
    round_up: bool,
) -> Option<Decimal> {
    let raw = cost.checked_mul(tier.rate())?;
    Some(if round_up { round_up_to_whole(raw) } else { raw })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // short-circuit tests
    // =========================================================================

    #[test]
    fn missing_cost_yields_zero() {
        let result = calculate_tip(None, Some(TipTier::TwentyPercent), true);

        assert_eq!(result, TipBreakdown::ZERO);
    }

    #[test]
    fn zero_cost_yields_zero() {
        let result = calculate_tip(Some(dec!(0.00)), Some(TipTier::TwentyPercent), true);

        assert_eq!(result.tip, dec!(0));
        assert_eq!(result.total, dec!(0));
    }

    #[test]
    fn zero_cost_is_not_rounded_up() {
        let result = calculate_tip(Some(Decimal::ZERO), None, true);

        assert_eq!(result, TipBreakdown::ZERO);
    }

    // =========================================================================
    // tier tests
    // =========================================================================

    #[test]
    fn twenty_percent_of_one_hundred() {
        let result = calculate_tip(Some(dec!(100.00)), Some(TipTier::TwentyPercent), false);

        assert_eq!(result.tip, dec!(20.00));
        assert_eq!(result.total, dec!(120.00));
    }

    #[test]
    fn eighteen_percent_of_one_hundred() {
        let result = calculate_tip(Some(dec!(100.00)), Some(TipTier::EighteenPercent), false);

        assert_eq!(result.tip, dec!(18.00));
        assert_eq!(result.total, dec!(118.00));
    }

    #[test]
    fn no_selection_uses_fifteen_percent() {
        let result = calculate_tip(Some(dec!(100.00)), None, false);

        assert_eq!(result.tip, dec!(15.00));
        assert_eq!(result.total, dec!(115.00));
    }

    // =========================================================================
    // rounding tests
    // =========================================================================

    #[test]
    fn round_up_takes_the_ceiling_of_the_tip() {
        let result = calculate_tip(Some(dec!(10.00)), Some(TipTier::FifteenPercent), true);

        assert_eq!(result.tip, dec!(2.00));
        assert_eq!(result.total, dec!(12.00));
    }

    #[test]
    fn without_round_up_the_tip_keeps_full_precision() {
        let result = calculate_tip(Some(dec!(12.34)), Some(TipTier::EighteenPercent), false);

        assert_eq!(result.tip, dec!(2.2212));
        assert_eq!(result.total, dec!(14.5612));
    }

    #[test]
    fn round_up_leaves_whole_tips_alone() {
        let result = calculate_tip(Some(dec!(50)), Some(TipTier::TwentyPercent), true);

        assert_eq!(result.tip, dec!(10));
        assert_eq!(result.total, dec!(60));
    }

    // =========================================================================
    // purity tests
    // =========================================================================

    #[test]
    fn calculation_is_idempotent() {
        let request = TipRequest::new(Some(dec!(87.65)), Some(TipTier::EighteenPercent), true);

        let first = calculate(&request);
        let second = calculate(&request);

        assert_eq!(first, second);
    }

    #[test]
    fn total_always_equals_cost_plus_tip() {
        for tier in TipTier::all() {
            for round_up in [false, true] {
                let cost = dec!(43.21);
                let result = calculate_tip(Some(cost), Some(*tier), round_up);

                assert_eq!(result.total, cost + result.tip);
            }
        }
    }

    // =========================================================================
    // range tests
    // =========================================================================

    #[test]
    fn largest_decimal_cost_yields_zero_instead_of_overflowing() {
        let result = calculate_tip(Some(Decimal::MAX), Some(TipTier::TwentyPercent), false);

        assert_eq!(result, TipBreakdown::ZERO);
    }

    #[test]
    fn largest_parsed_costs_yield_zero() {
        for text in ["7e28", "79228162514264337593543950335"] {
            let cost = crate::parse_optional_cost(text);
            assert!(cost.is_some(), "{text} should parse");

            let result = calculate_tip(cost, None, true);

            assert_eq!(result, TipBreakdown::ZERO, "cost {text}");
        }
    }

    #[test]
    fn large_cost_within_range_is_still_calculated() {
        let cost = Decimal::from_i128_with_scale(1_000_000_000_000_000_000_000_000_000, 0);

        let result = calculate_tip(Some(cost), Some(TipTier::FifteenPercent), true);

        assert!(result.tip > Decimal::ZERO);
        assert_eq!(result.total, cost + result.tip);
    }
}
