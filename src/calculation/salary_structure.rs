//! CTC-to-net-salary synthesis.
//!
//! Splits an annual cost-to-company figure into basic, HRA and special
//! allowance, then applies the provident fund and ESIC calculators to derive
//! deductions and net pay. The configured shares (40/20/25) leave 15% of CTC
//! outside gross salary as employer-side cost.

use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Deductions, EarningsComponents, EmployerContributions, SalaryStructure};

use super::{calculate_esic, calculate_provident_fund, round_to_unit};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Derives the full salary structure for an annual CTC.
///
/// Never fails; callers are expected to reject non-positive CTC first
/// (see [`try_synthesize_salary_structure`]).
///
/// # Examples
///
/// ```
/// use payroll_compliance::calculation::synthesize_salary_structure;
/// use payroll_compliance::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::builtin().unwrap();
/// let structure = synthesize_salary_structure(Decimal::from(600000), config.config());
///
/// assert_eq!(structure.components.gross, Decimal::from(510000));
/// assert_eq!(structure.net_salary, structure.components.gross - structure.deductions.total);
/// ```
pub fn synthesize_salary_structure(ctc: Decimal, config: &StatutoryConfig) -> SalaryStructure {
    let split = config.salary_split();

    let basic = round_to_unit(ctc * split.basic_share);
    let hra = round_to_unit(ctc * split.hra_share);
    let special_allowance = round_to_unit(ctc * split.special_allowance_share);
    let gross = basic + hra + special_allowance;

    let provident_fund = calculate_provident_fund(basic, Decimal::ZERO, config.provident_fund());
    let esic = calculate_esic(gross, config.esic());

    let esic_employee = esic.employee_contribution().unwrap_or(Decimal::ZERO);
    let esic_employer = esic.employer_contribution().unwrap_or(Decimal::ZERO);

    let deductions = Deductions {
        epf: provident_fund.employee_contribution,
        esic: esic_employee,
        total: provident_fund.employee_contribution + esic_employee,
    };
    let employer_contributions = EmployerContributions {
        epf: provident_fund.employer_contribution,
        esic: esic_employer,
        total: provident_fund.employer_contribution + esic_employer,
    };

    let net_salary = gross - deductions.total;

    SalaryStructure {
        ctc,
        components: EarningsComponents {
            basic,
            hra,
            special_allowance,
            gross,
        },
        deductions,
        employer_contributions,
        net_salary,
        monthly_gross: round_to_unit(gross / MONTHS_PER_YEAR),
        monthly_net: round_to_unit(net_salary / MONTHS_PER_YEAR),
    }
}

/// Like [`synthesize_salary_structure`], but rejects a CTC that is not
/// strictly positive.
pub fn try_synthesize_salary_structure(
    ctc: Decimal,
    config: &StatutoryConfig,
) -> EngineResult<SalaryStructure> {
    if ctc <= Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "ctc".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    Ok(synthesize_salary_structure(ctc, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn structure_for(ctc: &str) -> SalaryStructure {
        let config = ConfigLoader::builtin().unwrap();
        synthesize_salary_structure(dec(ctc), config.config())
    }

    fn assert_invariants(structure: &SalaryStructure) {
        let c = &structure.components;
        assert_eq!(c.gross, c.basic + c.hra + c.special_allowance);
        assert_eq!(structure.net_salary, c.gross - structure.deductions.total);
        assert_eq!(
            structure.deductions.total,
            structure.deductions.epf + structure.deductions.esic
        );
        assert_eq!(structure.monthly_gross, round_to_unit(c.gross / dec("12")));
        assert_eq!(structure.monthly_net, round_to_unit(structure.net_salary / dec("12")));
    }

    /// SS-001: six lakh CTC
    #[test]
    fn test_ctc_600000() {
        let structure = structure_for("600000");

        assert_eq!(structure.components.basic, dec("240000"));
        assert_eq!(structure.components.hra, dec("120000"));
        assert_eq!(structure.components.special_allowance, dec("150000"));
        assert_eq!(structure.components.gross, dec("510000"));
        // Basic is far above the wage ceiling, so PF is computed on 15000.
        assert_eq!(structure.deductions.epf, dec("1800"));
        // Gross is above the ESIC threshold.
        assert_eq!(structure.deductions.esic, dec("0"));
        assert_eq!(structure.deductions.total, dec("1800"));
        assert_eq!(structure.net_salary, dec("508200"));
        assert_eq!(structure.monthly_gross, dec("42500"));
        assert_eq!(structure.monthly_net, dec("42350"));
        assert_invariants(&structure);
    }

    /// SS-002: small CTC where ESIC applies
    #[test]
    fn test_small_ctc_with_esic() {
        let structure = structure_for("24000");

        assert_eq!(structure.components.basic, dec("9600"));
        assert_eq!(structure.components.hra, dec("4800"));
        assert_eq!(structure.components.special_allowance, dec("6000"));
        assert_eq!(structure.components.gross, dec("20400"));
        assert_eq!(structure.deductions.epf, dec("1152"));
        assert_eq!(structure.deductions.esic, dec("153"));
        assert_eq!(structure.deductions.total, dec("1305"));
        assert_eq!(structure.net_salary, dec("19095"));
        assert_eq!(structure.monthly_gross, dec("1700"));
        assert_eq!(structure.monthly_net, dec("1591"));
        assert_eq!(structure.employer_contributions.esic, dec("663"));
        assert_invariants(&structure);
    }

    /// SS-003: the split leaves 15% of CTC outside gross
    #[test]
    fn test_split_leaves_employer_residual() {
        let structure = structure_for("1000000");

        assert_eq!(structure.components.gross, dec("850000"));
        assert_eq!(structure.ctc - structure.components.gross, dec("150000"));
    }

    /// SS-004: components are rounded individually
    #[test]
    fn test_components_rounded_individually() {
        let structure = structure_for("123457");

        // 49382.8, 24691.4, 30864.25
        assert_eq!(structure.components.basic, dec("49383"));
        assert_eq!(structure.components.hra, dec("24691"));
        assert_eq!(structure.components.special_allowance, dec("30864"));
        assert_eq!(structure.components.gross, dec("104938"));
        assert_invariants(&structure);
    }

    #[test]
    fn test_invariants_hold_across_ctc_values() {
        for ctc in ["1", "999", "24999", "26000", "350000", "1234567", "98765432"] {
            assert_invariants(&structure_for(ctc));
        }
    }

    #[test]
    fn test_try_rejects_zero_and_negative_ctc() {
        let config = ConfigLoader::builtin().unwrap();

        for ctc in ["0", "-1"] {
            match try_synthesize_salary_structure(dec(ctc), config.config()) {
                Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "ctc"),
                other => panic!("Expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_try_accepts_positive_ctc() {
        let config = ConfigLoader::builtin().unwrap();
        let structure = try_synthesize_salary_structure(dec("600000"), config.config()).unwrap();
        assert_eq!(structure.net_salary, dec("508200"));
    }
}
