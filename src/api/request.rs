//! Request types for the payroll compliance API.
//!
//! Each endpoint takes a small JSON body. Monetary fields are decimals and
//! accept either JSON numbers or strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::validation::IdentifierKind;

/// Request body for the `/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    /// Which identifier format to check.
    pub kind: IdentifierKind,
    /// The raw identifier as entered.
    pub value: String,
}

/// Request body for the `/contributions/provident-fund` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidentFundRequest {
    /// Monthly basic salary.
    pub basic: Decimal,
    /// Monthly dearness allowance (default: 0).
    #[serde(default)]
    pub dearness_allowance: Decimal,
}

/// Request body for the `/contributions/esic` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsicRequest {
    /// Monthly gross salary.
    pub gross_salary: Decimal,
}

/// Request body for the `/contributions/professional-tax` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalTaxRequest {
    /// Monthly salary.
    pub monthly_salary: Decimal,
    /// Region name or key, e.g. "Maharashtra" or "west_bengal".
    pub region: String,
}

/// Request body for the `/contributions/gratuity` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GratuityRequest {
    /// Last drawn monthly salary (basic plus dearness allowance).
    pub last_drawn_salary: Decimal,
    /// Completed years of service; fractional values are allowed.
    pub years_of_service: Decimal,
}

/// Request body for the `/salary-structure` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryStructureRequest {
    /// Annual cost to company.
    pub ctc: Decimal,
}

impl SalaryStructureRequest {
    /// Checks that the CTC is within the accepted range.
    ///
    /// Zero is left to the synthesizer, which rejects any CTC that is not
    /// strictly positive.
    pub fn validate(&self) -> EngineResult<()> {
        require_non_negative("ctc", self.ctc).map(|_| ())
    }
}

/// Largest amount (or tenure) accepted in a request body: 10^15.
pub const MAX_REQUEST_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Rejects a negative or implausibly large amount for the named field.
pub(crate) fn require_non_negative(field: &str, value: Decimal) -> EngineResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not be negative (got {})", value),
        });
    }
    if value > MAX_REQUEST_AMOUNT {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not exceed {} (got {})", MAX_REQUEST_AMOUNT, value),
        });
    }
    Ok(value)
}

impl ProvidentFundRequest {
    /// Checks that both wage components are within range.
    pub fn validate(&self) -> EngineResult<()> {
        require_non_negative("basic", self.basic)?;
        require_non_negative("dearness_allowance", self.dearness_allowance)?;
        Ok(())
    }
}

impl EsicRequest {
    /// Checks that the gross salary is within range.
    pub fn validate(&self) -> EngineResult<()> {
        require_non_negative("gross_salary", self.gross_salary).map(|_| ())
    }
}

impl ProfessionalTaxRequest {
    /// Checks that the salary is within range.
    ///
    /// The region is not checked here: unknown regions are answered with a
    /// zero tax and a note.
    pub fn validate(&self) -> EngineResult<()> {
        require_non_negative("monthly_salary", self.monthly_salary).map(|_| ())
    }
}

impl GratuityRequest {
    /// Checks that salary and tenure are within range.
    pub fn validate(&self) -> EngineResult<()> {
        require_non_negative("last_drawn_salary", self.last_drawn_salary)?;
        require_non_negative("years_of_service", self.years_of_service)?;
        Ok(())
    }
}
