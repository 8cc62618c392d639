//! Shared rounding helpers for tax calculations.
//!
//! Slab math stays un-rounded until the outer calculator boundary; these
//! helpers perform the two roundings that boundary needs.

use rust_decimal::Decimal;

/// Rounds a liability to the nearest whole rupee, midpoints away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::round_rupees;
///
/// assert_eq!(round_rupees(dec!(23400.4)), dec!(23400));
/// assert_eq!(round_rupees(dec!(23400.5)), dec!(23401));
/// ```
pub fn round_rupees(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an effective-rate percentage to two decimal places, midpoints away
/// from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::round_percentage;
///
/// assert_eq!(round_percentage(dec!(2.1666)), dec!(2.17));
/// assert_eq!(round_percentage(dec!(9.425)), dec!(9.43));
/// ```
pub fn round_percentage(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_rupees tests
    // =========================================================================

    #[test]
    fn round_rupees_rounds_down_below_midpoint() {
        assert_eq!(round_rupees(dec!(62399.4)), dec!(62399));
    }

    #[test]
    fn round_rupees_rounds_up_at_midpoint() {
        assert_eq!(round_rupees(dec!(0.5)), dec!(1));
    }

    #[test]
    fn round_rupees_preserves_whole_amounts() {
        assert_eq!(round_rupees(dec!(23400)), dec!(23400));
    }

    // =========================================================================
    // round_percentage tests
    // =========================================================================

    #[test]
    fn round_percentage_keeps_two_decimals() {
        assert_eq!(round_percentage(dec!(2.16666667)), dec!(2.17));
    }

    #[test]
    fn round_percentage_rounds_midpoint_up() {
        assert_eq!(round_percentage(dec!(31.205)), dec!(31.21));
    }

    #[test]
    fn round_percentage_handles_zero() {
        assert_eq!(round_percentage(dec!(0)), dec!(0.00));
    }
}
