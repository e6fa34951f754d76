//! Contribution result models.
//!
//! This module contains the breakdowns returned by the statutory
//! contribution calculators. Every monetary field is a whole-unit amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TaxSlab;

/// Provident fund contributions for one month's wages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidentFundContribution {
    /// Basic plus dearness allowance, capped at the wage ceiling.
    pub applicable_wage: Decimal,
    /// True when the wage ceiling reduced the contribution base.
    pub wage_capped: bool,
    /// Employee share deducted from salary.
    pub employee_contribution: Decimal,
    /// Employer share credited to the provident fund account.
    pub employer_epf_contribution: Decimal,
    /// Employer share diverted to the pension scheme.
    pub employer_eps_contribution: Decimal,
    /// Sum of both employer shares.
    pub employer_contribution: Decimal,
    /// Employee plus employer contributions.
    pub total_contribution: Decimal,
}

/// ESIC contributions, or the reason the scheme does not apply.
///
/// Serializes as `{"applicable": true, employee/employer/total contributions}`
/// or `{"applicable": false, "reason": ...}`.
///
/// # Example
///
/// ```
/// use payroll_compliance::models::EsicContribution;
/// use rust_decimal::Decimal;
///
/// let esic = EsicContribution::NotApplicable {
///     reason: "Gross salary exceeds ESIC threshold of 21000".to_string(),
/// };
/// assert!(!esic.is_applicable());
/// assert_eq!(esic.employee_contribution(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "EsicWire", try_from = "EsicWire")]
pub enum EsicContribution {
    /// The scheme applies to this gross salary.
    Applicable {
        /// Employee share deducted from salary.
        employee_contribution: Decimal,
        /// Employer share.
        employer_contribution: Decimal,
        /// Employee plus employer shares.
        total_contribution: Decimal,
    },
    /// Gross salary is above the applicability threshold.
    NotApplicable {
        /// Why the scheme does not apply.
        reason: String,
    },
}

impl EsicContribution {
    /// Returns true if the scheme applies.
    pub fn is_applicable(&self) -> bool {
        matches!(self, Self::Applicable { .. })
    }

    /// Returns the employee share when applicable.
    pub fn employee_contribution(&self) -> Option<Decimal> {
        match self {
            Self::Applicable {
                employee_contribution,
                ..
            } => Some(*employee_contribution),
            Self::NotApplicable { .. } => None,
        }
    }

    /// Returns the employer share when applicable.
    pub fn employer_contribution(&self) -> Option<Decimal> {
        match self {
            Self::Applicable {
                employer_contribution,
                ..
            } => Some(*employer_contribution),
            Self::NotApplicable { .. } => None,
        }
    }
}

/// Flat JSON form of [`EsicContribution`].
#[derive(Serialize, Deserialize)]
struct EsicWire {
    applicable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    employee_contribution: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    employer_contribution: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_contribution: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl From<EsicContribution> for EsicWire {
    fn from(esic: EsicContribution) -> Self {
        match esic {
            EsicContribution::Applicable {
                employee_contribution,
                employer_contribution,
                total_contribution,
            } => Self {
                applicable: true,
                employee_contribution: Some(employee_contribution),
                employer_contribution: Some(employer_contribution),
                total_contribution: Some(total_contribution),
                reason: None,
            },
            EsicContribution::NotApplicable { reason } => Self {
                applicable: false,
                employee_contribution: None,
                employer_contribution: None,
                total_contribution: None,
                reason: Some(reason),
            },
        }
    }
}

impl TryFrom<EsicWire> for EsicContribution {
    type Error = String;

    fn try_from(wire: EsicWire) -> Result<Self, Self::Error> {
        if !wire.applicable {
            return Ok(Self::NotApplicable {
                reason: wire.reason.unwrap_or_default(),
            });
        }
        match (
            wire.employee_contribution,
            wire.employer_contribution,
            wire.total_contribution,
        ) {
            (Some(employee_contribution), Some(employer_contribution), Some(total_contribution)) => {
                Ok(Self::Applicable {
                    employee_contribution,
                    employer_contribution,
                    total_contribution,
                })
            }
            _ => Err("applicable ESIC contribution is missing its amounts".to_string()),
        }
    }
}

/// Professional tax for one month in one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalTax {
    /// The region as supplied by the caller.
    pub region: String,
    /// Flat monthly tax; zero when no table applies.
    pub tax: Decimal,
    /// The slab that matched, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slab: Option<TaxSlab>,
    /// Explanation when no tax is levied because no table applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Gratuity payable on separation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gratuity {
    /// True when the minimum service requirement is met.
    pub eligible: bool,
    /// Payable amount after the statutory cap; zero when ineligible.
    pub amount: Decimal,
    /// Amount before the cap was applied, when eligible and within the
    /// decimal range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncapped_amount: Option<Decimal>,
    /// True when the statutory cap reduced the amount.
    pub capped: bool,
    /// Explanation for ineligibility or capping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
