//! Provident fund contribution calculation.
//!
//! Contributions are computed on basic pay plus dearness allowance, capped
//! at the statutory wage ceiling. The employer's share is split between the
//! provident fund account (3.67%) and the pension scheme (8.33%).

use rust_decimal::Decimal;

use crate::config::ProvidentFundRates;
use crate::models::ProvidentFundContribution;

use super::round_to_unit;

/// Calculates employee and employer provident fund contributions.
///
/// # Arguments
///
/// * `basic` - Basic pay for the period
/// * `dearness_allowance` - Dearness allowance for the period (pass zero when none)
/// * `rates` - Provident fund rates and wage ceiling
///
/// # Examples
///
/// ```
/// use payroll_compliance::calculation::calculate_provident_fund;
/// use payroll_compliance::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::builtin().unwrap();
/// let pf = calculate_provident_fund(
///     Decimal::from(20000),
///     Decimal::ZERO,
///     config.config().provident_fund(),
/// );
///
/// assert_eq!(pf.applicable_wage, Decimal::from(15000));
/// assert_eq!(pf.employee_contribution, Decimal::from(1800));
/// ```
pub fn calculate_provident_fund(
    basic: Decimal,
    dearness_allowance: Decimal,
    rates: &ProvidentFundRates,
) -> ProvidentFundContribution {
    // Anything past the decimal range is far above the ceiling anyway.
    let wage = basic.saturating_add(dearness_allowance);
    let applicable_wage = wage.min(rates.wage_ceiling);

    let employee_contribution = round_to_unit(applicable_wage * rates.employee_rate);
    let employer_epf_contribution = round_to_unit(applicable_wage * rates.employer_epf_rate);
    let employer_eps_contribution = round_to_unit(applicable_wage * rates.employer_eps_rate);
    let employer_contribution = employer_epf_contribution + employer_eps_contribution;

    ProvidentFundContribution {
        applicable_wage,
        wage_capped: wage > rates.wage_ceiling,
        employee_contribution,
        employer_epf_contribution,
        employer_eps_contribution,
        employer_contribution,
        total_contribution: employee_contribution + employer_contribution,
    }
}
