//! Employees' State Insurance (ESIC) contribution calculation.

use rust_decimal::Decimal;

use crate::config::EsicRates;
use crate::models::EsicContribution;

use super::round_to_unit;

/// Calculates ESIC contributions on a gross salary.
///
/// The scheme applies only when the gross salary is at or below the
/// threshold; above it no figures are produced.
///
/// # Examples
///
/// ```
/// use payroll_compliance::calculation::calculate_esic;
/// use payroll_compliance::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::builtin().unwrap();
///
/// assert!(calculate_esic(Decimal::from(21000), config.config().esic()).is_applicable());
/// assert!(!calculate_esic(Decimal::from(21001), config.config().esic()).is_applicable());
/// ```
pub fn calculate_esic(gross_salary: Decimal, rates: &EsicRates) -> EsicContribution {
    if gross_salary > rates.gross_salary_threshold {
        return EsicContribution::NotApplicable {
            reason: format!(
                "Gross salary {} exceeds ESIC threshold of {}",
                gross_salary.normalize(),
                rates.gross_salary_threshold.normalize()
            ),
        };
    }

    let employee_contribution = round_to_unit(gross_salary * rates.employee_rate);
    let employer_contribution = round_to_unit(gross_salary * rates.employer_rate);

    EsicContribution::Applicable {
        employee_contribution,
        employer_contribution,
        total_contribution: employee_contribution + employer_contribution,
    }
}
