//! Shared numeric helpers for the split calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(3.754)), dec!(3.75));
/// assert_eq!(round_half_up(dec!(3.755)), dec!(3.76));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(12.344));

        assert_eq!(result, dec!(12.34));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(12.345));

        assert_eq!(result, dec!(12.35));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(12.34));

        assert_eq!(result, dec!(12.34));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn round_half_up_handles_repeating_quotients() {
        // 10 / 3 people leaves a repeating decimal behind.
        let result = round_half_up(dec!(10) / dec!(3));

        assert_eq!(result, dec!(3.33));
    }
}
