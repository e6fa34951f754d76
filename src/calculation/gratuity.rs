//! Gratuity calculation.
//!
//! Gratuity is fifteen days' wages (on a 26-day month) per year of service,
//! payable only after the minimum tenure and capped at a statutory maximum.

use rust_decimal::Decimal;

use crate::config::GratuityRates;
use crate::models::Gratuity;

use super::round_to_unit;

/// Calculates gratuity from the last drawn monthly salary and tenure.
///
/// Below the minimum tenure no partial amount is computed.
///
/// # Examples
///
/// ```
/// use payroll_compliance::calculation::calculate_gratuity;
/// use payroll_compliance::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::builtin().unwrap();
/// let gratuity = calculate_gratuity(Decimal::from(50000), Decimal::from(10), config.config().gratuity());
///
/// assert!(gratuity.eligible);
/// assert_eq!(gratuity.amount, Decimal::from(288462));
/// ```
pub fn calculate_gratuity(
    last_drawn_salary: Decimal,
    years_of_service: Decimal,
    rates: &GratuityRates,
) -> Gratuity {
    if years_of_service < rates.minimum_years_of_service {
        return Gratuity {
            eligible: false,
            amount: Decimal::ZERO,
            uncapped_amount: None,
            capped: false,
            message: Some(format!(
                "Gratuity requires at least {} years of service",
                rates.minimum_years_of_service.normalize()
            )),
        };
    }

    // None when the product leaves the decimal range; that is always over the cap.
    let raw = last_drawn_salary
        .checked_mul(years_of_service)
        .and_then(|amount| amount.checked_mul(rates.wage_days))
        .and_then(|amount| amount.checked_div(rates.working_days_per_month))
        .map(round_to_unit);
    let capped = raw.is_none_or(|raw| raw > rates.maximum_amount);
    let amount = match raw {
        Some(raw) if !capped => raw,
        _ => rates.maximum_amount,
    };

    Gratuity {
        eligible: true,
        amount,
        uncapped_amount: raw,
        capped,
        message: capped.then(|| {
            format!(
                "Capped at statutory maximum of {}",
                rates.maximum_amount.normalize()
            )
        }),
    }
}
