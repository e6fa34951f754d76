//! Configuration types for statutory payroll rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files under `config/india/`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata about the jurisdiction the rule set applies to.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// ISO 3166 country code (e.g., "IN").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// The date from which this rule set is effective.
    pub version: String,
}

/// Provident fund contribution rates.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvidentFundRates {
    /// Monthly wage above which contributions are not computed.
    pub wage_ceiling: Decimal,
    /// Employee contribution rate (e.g., 0.12).
    pub employee_rate: Decimal,
    /// Employer share credited to the provident fund account.
    pub employer_epf_rate: Decimal,
    /// Employer share diverted to the pension scheme.
    pub employer_eps_rate: Decimal,
}

/// Employees' State Insurance contribution rates.
#[derive(Debug, Clone, Deserialize)]
pub struct EsicRates {
    /// Gross salary at or below which the scheme applies.
    pub gross_salary_threshold: Decimal,
    /// Employee contribution rate (e.g., 0.0075).
    pub employee_rate: Decimal,
    /// Employer contribution rate (e.g., 0.0325).
    pub employer_rate: Decimal,
}

/// Gratuity eligibility and formula parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct GratuityRates {
    /// Years of service below which no gratuity is payable.
    pub minimum_years_of_service: Decimal,
    /// Days of wages paid per completed year (the "15" in 15/26).
    pub wage_days: Decimal,
    /// Working days in a month (the "26" in 15/26).
    pub working_days_per_month: Decimal,
    /// Statutory maximum payable amount.
    pub maximum_amount: Decimal,
}

/// Shares of annual CTC allotted to each earnings component.
///
/// The shares intentionally do not sum to one; the residual is an
/// employer-side cost that never reaches gross salary.
#[derive(Debug, Clone, Deserialize)]
pub struct SalarySplit {
    /// Basic salary share (e.g., 0.40).
    pub basic_share: Decimal,
    /// House rent allowance share (e.g., 0.20).
    pub hra_share: Decimal,
    /// Special allowance share (e.g., 0.25).
    pub special_allowance_share: Decimal,
}

/// A single professional tax slab with inclusive bounds and a flat amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    /// Lowest monthly salary in this slab.
    pub min: Decimal,
    /// Highest monthly salary in this slab, or `None` when unbounded.
    pub max: Option<Decimal>,
    /// Flat monthly tax for any salary in this slab.
    pub tax: Decimal,
}

impl TaxSlab {
    /// Returns true if `salary` falls within this slab's inclusive bounds.
    pub fn contains(&self, salary: Decimal) -> bool {
        salary >= self.min && self.max.is_none_or(|max| salary <= max)
    }
}

/// The ordered slab list for one region.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionalTaxTable {
    /// Display name of the region (e.g., "Tamil Nadu").
    pub name: String,
    /// Slabs ordered by ascending `min`.
    pub slabs: Vec<TaxSlab>,
}

/// Professional tax configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfessionalTaxConfig {
    /// Map of normalised region key to its slab table.
    pub regions: BTreeMap<String, RegionalTaxTable>,
}

impl ProfessionalTaxConfig {
    /// Looks up a region by key, normalising case, whitespace and hyphens.
    pub fn region(&self, region: &str) -> Option<&RegionalTaxTable> {
        self.regions.get(&normalize_region_key(region))
    }
}

/// Normalises a region name into its configuration key.
///
/// `"Tamil Nadu"`, `"tamil-nadu"` and `" TAMIL_NADU "` all become `"tamil_nadu"`.
pub fn normalize_region_key(region: &str) -> String {
    region
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Statutory configuration file structure (statutory.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryRates {
    /// Jurisdiction metadata.
    pub jurisdiction: JurisdictionMetadata,
    /// Provident fund rates.
    pub provident_fund: ProvidentFundRates,
    /// ESIC rates.
    pub esic: EsicRates,
    /// Gratuity parameters.
    pub gratuity: GratuityRates,
    /// CTC split used by the salary structure synthesizer.
    pub salary_split: SalarySplit,
}

/// The complete statutory configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct StatutoryConfig {
    rates: StatutoryRates,
    professional_tax: ProfessionalTaxConfig,
}

impl StatutoryConfig {
    /// Creates a new StatutoryConfig from its component parts.
    pub fn new(rates: StatutoryRates, professional_tax: ProfessionalTaxConfig) -> Self {
        Self {
            rates,
            professional_tax,
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.rates.jurisdiction
    }

    /// Returns the provident fund rates.
    pub fn provident_fund(&self) -> &ProvidentFundRates {
        &self.rates.provident_fund
    }

    /// Returns the ESIC rates.
    pub fn esic(&self) -> &EsicRates {
        &self.rates.esic
    }

    /// Returns the gratuity parameters.
    pub fn gratuity(&self) -> &GratuityRates {
        &self.rates.gratuity
    }

    /// Returns the CTC split.
    pub fn salary_split(&self) -> &SalarySplit {
        &self.rates.salary_split
    }

    /// Returns the professional tax tables.
    pub fn professional_tax(&self) -> &ProfessionalTaxConfig {
        &self.professional_tax
    }
}
