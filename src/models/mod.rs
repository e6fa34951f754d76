//! Core data models for the payroll compliance engine.
//!
//! This module contains the value objects returned by validators,
//! calculators and the bank directory.

mod bank_details;
mod contribution;
mod salary_structure;
mod validation_result;

pub use bank_details::BankDetails;
pub use contribution::{EsicContribution, Gratuity, ProfessionalTax, ProvidentFundContribution};
pub use salary_structure::{Deductions, EarningsComponents, EmployerContributions, SalaryStructure};
pub use validation_result::ValidationResult;
