//! Regional professional tax lookup.
//!
//! Professional tax is levied by state. Each configured region maps to an
//! ordered list of salary slabs, each carrying a flat monthly amount.
//! Slabs are not marginal: the whole salary falls in exactly one slab and
//! that slab's amount is the tax.

use rust_decimal::Decimal;

use crate::config::ProfessionalTaxConfig;
use crate::models::ProfessionalTax;

use super::round_to_unit;

/// Note attached when the region has no professional tax table.
pub const NOT_APPLICABLE_NOTE: &str = "Professional tax not applicable in this region";

/// Looks up the monthly professional tax for a salary in a region.
///
/// The salary is rounded to whole units before matching so that every
/// non-negative amount falls in exactly one slab. Unknown regions yield a
/// zero tax with a note rather than an error.
///
/// # Examples
///
/// ```
/// use payroll_compliance::calculation::calculate_professional_tax;
/// use payroll_compliance::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::builtin().unwrap();
/// let tables = config.config().professional_tax();
///
/// let tax = calculate_professional_tax(Decimal::from(9000), "Maharashtra", tables);
/// assert_eq!(tax.tax, Decimal::from(175));
///
/// let none = calculate_professional_tax(Decimal::from(9000), "Delhi", tables);
/// assert_eq!(none.tax, Decimal::ZERO);
/// assert!(none.note.is_some());
/// ```
pub fn calculate_professional_tax(
    monthly_salary: Decimal,
    region: &str,
    tables: &ProfessionalTaxConfig,
) -> ProfessionalTax {
    let Some(table) = tables.region(region) else {
        return ProfessionalTax {
            region: region.to_string(),
            tax: Decimal::ZERO,
            slab: None,
            note: Some(NOT_APPLICABLE_NOTE.to_string()),
        };
    };

    let salary = round_to_unit(monthly_salary);
    match table.slabs.iter().find(|slab| slab.contains(salary)) {
        Some(slab) => ProfessionalTax {
            region: region.to_string(),
            tax: slab.tax,
            slab: Some(slab.clone()),
            note: None,
        },
        None => ProfessionalTax {
            region: region.to_string(),
            tax: Decimal::ZERO,
            slab: None,
            note: Some(format!(
                "Salary {} is outside the {} slab table",
                salary, table.name
            )),
        },
    }
}
