//! Whole-unit rounding shared by every calculator.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the nearest whole currency unit, halves away from zero.
///
/// Every intermediate line item is rounded with this function so that the
/// displayed components always add up to the displayed totals.
///
/// # Examples
///
/// ```
/// use payroll_compliance::calculation::round_to_unit;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_unit(Decimal::from_str("550.5").unwrap()), Decimal::from(551));
/// assert_eq!(round_to_unit(Decimal::from_str("440.4").unwrap()), Decimal::from(440));
/// ```
pub fn round_to_unit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
