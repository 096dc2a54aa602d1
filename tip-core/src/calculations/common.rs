//! Common rounding helpers for money values.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value up to the next whole currency unit (toward positive infinity).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_up_to_whole;
///
/// assert_eq!(round_up_to_whole(dec!(1.50)), dec!(2));
/// assert_eq!(round_up_to_whole(dec!(1.01)), dec!(2));
/// assert_eq!(round_up_to_whole(dec!(2.00)), dec!(2));
/// assert_eq!(round_up_to_whole(dec!(-1.5)), dec!(-1));
/// ```
pub fn round_up_to_whole(value: Decimal) -> Decimal {
    value.ceil()
}

/// Rounds a value to `digits` fractional digits using banker's rounding.
///
/// Half-even is the default rounding mode of locale currency formatters, so
/// displayed amounts match what the platform would print.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_to_minor_units;
///
/// assert_eq!(round_to_minor_units(dec!(0.125), 2), dec!(0.12));
/// assert_eq!(round_to_minor_units(dec!(0.135), 2), dec!(0.14));
/// assert_eq!(round_to_minor_units(dec!(1234.5), 0), dec!(1234));
/// ```
pub fn round_to_minor_units(
    value: Decimal,
    digits: u32,
) -> Decimal {
    value.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_up_to_whole tests
    // =========================================================================

    #[test]
    fn round_up_to_whole_rounds_fractions_up() {
        let result = round_up_to_whole(dec!(1.50));

        assert_eq!(result, dec!(2));
    }

    #[test]
    fn round_up_to_whole_rounds_tiny_fractions_up() {
        let result = round_up_to_whole(dec!(18.0001));

        assert_eq!(result, dec!(19));
    }

    #[test]
    fn round_up_to_whole_preserves_whole_values() {
        let result = round_up_to_whole(dec!(20.00));

        assert_eq!(result, dec!(20));
    }

    #[test]
    fn round_up_to_whole_handles_zero() {
        let result = round_up_to_whole(dec!(0.00));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // round_to_minor_units tests
    // =========================================================================

    #[test]
    fn round_to_minor_units_rounds_half_to_even() {
        assert_eq!(round_to_minor_units(dec!(2.345), 2), dec!(2.34));
        assert_eq!(round_to_minor_units(dec!(2.355), 2), dec!(2.36));
    }

    #[test]
    fn round_to_minor_units_rounds_non_midpoints_normally() {
        assert_eq!(round_to_minor_units(dec!(2.3451), 2), dec!(2.35));
        assert_eq!(round_to_minor_units(dec!(2.3449), 2), dec!(2.34));
    }

    #[test]
    fn round_to_minor_units_supports_zero_digit_currencies() {
        assert_eq!(round_to_minor_units(dec!(1499.5), 0), dec!(1500));
        assert_eq!(round_to_minor_units(dec!(1498.5), 0), dec!(1498));
    }
}
