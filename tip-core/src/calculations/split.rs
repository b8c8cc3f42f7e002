//! Per-person tip and total amounts.
//!
//! Both entry points take the raw (already sanitized) field strings plus the
//! effective tip percent and produce display-ready two-decimal strings. Any
//! unset or unusable input produces [`ZERO_DISPLAY`] rather than an error;
//! the readouts show `0.00` until the form is complete.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Displayed when the amounts cannot be computed yet.
pub const ZERO_DISPLAY: &str = "0.00";

/// Tip amount owed per person, as a fixed two-decimal string.
///
/// Returns [`ZERO_DISPLAY`] when the bill or people field is empty, the
/// people count is zero, or any value fails to parse.
pub fn tip_per_person(
    bill: &str,
    people: &str,
    percent: Option<Decimal>,
) -> String {
    match per_person(bill, people, percent) {
        Some((tip, _)) => format_amount(tip),
        None => ZERO_DISPLAY.to_string(),
    }
}

/// Total owed per person (bill share plus tip share), as a fixed two-decimal
/// string. Fallback behavior matches [`tip_per_person`].
pub fn total_per_person(
    bill: &str,
    people: &str,
    percent: Option<Decimal>,
) -> String {
    match per_person(bill, people, percent) {
        Some((_, total)) => format_amount(total),
        None => ZERO_DISPLAY.to_string(),
    }
}

/// Computes `(tip, total)` per person, or `None` when any input is unusable.
fn per_person(
    bill: &str,
    people: &str,
    percent: Option<Decimal>,
) -> Option<(Decimal, Decimal)> {
    let bill = parse_amount(bill)?;
    let people = parse_people(people)?;
    let percent = percent?;

    let tip_total = bill * percent / Decimal::ONE_HUNDRED;
    Some((tip_total / people, (bill + tip_total) / people))
}

/// Parses a sanitized amount string. Empty means unset.
fn parse_amount(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Parses a sanitized people count. Empty means unset; zero is unusable
/// (division guard; the error flag itself lives in the session).
fn parse_people(s: &str) -> Option<Decimal> {
    let count: u64 = s.trim().parse().ok()?;
    if count == 0 { None } else { Some(Decimal::from(count)) }
}

fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_half_up(amount))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn fifteen_percent_split_four_ways() {
        assert_eq!(tip_per_person("100", "4", Some(dec!(15))), "3.75");
        assert_eq!(total_per_person("100", "4", Some(dec!(15))), "28.75");
    }

    #[test]
    fn zero_people_yields_zero_display() {
        assert_eq!(tip_per_person("50", "0", Some(dec!(10))), "0.00");
        assert_eq!(total_per_person("50", "0", Some(dec!(10))), "0.00");
    }

    #[test]
    fn empty_bill_yields_zero_display() {
        assert_eq!(tip_per_person("", "4", Some(dec!(15))), "0.00");
        assert_eq!(total_per_person("", "4", Some(dec!(15))), "0.00");
    }

    #[test]
    fn empty_people_yields_zero_display() {
        assert_eq!(tip_per_person("100", "", Some(dec!(15))), "0.00");
        assert_eq!(total_per_person("100", "", Some(dec!(15))), "0.00");
    }

    #[test]
    fn missing_percent_yields_zero_display() {
        assert_eq!(tip_per_person("100", "4", None), "0.00");
        assert_eq!(total_per_person("100", "4", None), "0.00");
    }

    #[test]
    fn zero_percent_still_splits_the_bill() {
        assert_eq!(tip_per_person("100", "4", Some(Decimal::ZERO)), "0.00");
        assert_eq!(total_per_person("100", "4", Some(Decimal::ZERO)), "25.00");
    }

    #[test]
    fn fractional_percent_is_honored() {
        assert_eq!(tip_per_person("200", "2", Some(dec!(12.5))), "12.50");
        assert_eq!(total_per_person("200", "2", Some(dec!(12.5))), "112.50");
    }

    #[test]
    fn repeating_quotients_round_half_away_from_zero() {
        // 100 * 0.10 / 3 = 3.333... and 110 / 3 = 36.666...
        assert_eq!(tip_per_person("100", "3", Some(dec!(10))), "3.33");
        assert_eq!(total_per_person("100", "3", Some(dec!(10))), "36.67");
    }

    #[test]
    fn results_always_carry_two_decimals() {
        assert_eq!(tip_per_person("10", "1", Some(dec!(50))), "5.00");
        assert_eq!(total_per_person("10", "1", Some(dec!(50))), "15.00");
    }

    #[test]
    fn leading_zeros_in_people_count_are_accepted() {
        assert_eq!(total_per_person("100", "004", Some(dec!(15))), "28.75");
    }

    #[test]
    fn percent_over_one_hundred_is_accepted() {
        assert_eq!(tip_per_person("10", "1", Some(dec!(150))), "15.00");
        assert_eq!(total_per_person("10", "1", Some(dec!(150))), "25.00");
    }
}
