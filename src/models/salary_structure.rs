//! Salary structure model.
//!
//! This module contains the [`SalaryStructure`] type produced by the
//! CTC-to-net-salary synthesizer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Annual earnings components derived from CTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsComponents {
    /// Basic salary.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Special allowance.
    pub special_allowance: Decimal,
    /// Sum of the three components above.
    pub gross: Decimal,
}

/// Employee-side statutory deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Employee provident fund contribution.
    pub epf: Decimal,
    /// Employee ESIC contribution; zero when the scheme does not apply.
    pub esic: Decimal,
    /// Sum of all deductions.
    pub total: Decimal,
}

/// Employer-side statutory contributions, reported for information only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerContributions {
    /// Employer provident fund and pension contributions.
    pub epf: Decimal,
    /// Employer ESIC contribution; zero when the scheme does not apply.
    pub esic: Decimal,
    /// Sum of employer contributions.
    pub total: Decimal,
}

/// A complete salary breakdown for one annual CTC figure.
///
/// Invariants: `components.gross == basic + hra + special_allowance`,
/// `net_salary == components.gross - deductions.total`,
/// `monthly_gross == round(gross / 12)` and `monthly_net == round(net_salary / 12)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// Annual cost to company.
    pub ctc: Decimal,
    /// Earnings components.
    pub components: EarningsComponents,
    /// Employee deductions.
    pub deductions: Deductions,
    /// Employer contributions outside gross.
    pub employer_contributions: EmployerContributions,
    /// Gross minus deductions.
    pub net_salary: Decimal,
    /// Gross divided by twelve, rounded.
    pub monthly_gross: Decimal,
    /// Net salary divided by twelve, rounded.
    pub monthly_net: Decimal,
}
