//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! rules from YAML files, either from a directory on disk or from the copy
//! embedded in the crate.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ProfessionalTaxConfig, StatutoryConfig, StatutoryRates, TaxSlab};

const BUILTIN_STATUTORY: &str = include_str!("../../config/india/statutory.yaml");
const BUILTIN_PROFESSIONAL_TAX: &str = include_str!("../../config/india/professional_tax.yaml");

/// Loads and provides access to statutory configuration.
///
/// # Directory Structure
///
/// ```text
/// config/india/
/// ├── statutory.yaml         # PF, ESIC, gratuity rates and the CTC split
/// └── professional_tax.yaml  # Regional professional tax slabs
/// ```
///
/// # Example
///
/// ```
/// use payroll_compliance::config::ConfigLoader;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// assert_eq!(loader.jurisdiction().code, "IN");
/// assert!(loader.region("Maharashtra").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML or missing fields (`ConfigParseError`)
    /// - A slab table does not partition `[0, ∞)` (`InvalidTaxTable`)
    /// - A rate or share lies outside `[0, 1]` (`InvalidRate`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_compliance::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/india")?;
    /// # Ok::<(), payroll_compliance::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rates = Self::load_yaml::<StatutoryRates>(&path.join("statutory.yaml"))?;
        let professional_tax =
            Self::load_yaml::<ProfessionalTaxConfig>(&path.join("professional_tax.yaml"))?;

        Self::from_parts(rates, professional_tax)
    }

    /// Builds configuration from the statutory defaults embedded in the crate.
    pub fn builtin() -> EngineResult<Self> {
        let rates = Self::parse_yaml::<StatutoryRates>(BUILTIN_STATUTORY, "builtin:statutory.yaml")?;
        let professional_tax = Self::parse_yaml::<ProfessionalTaxConfig>(
            BUILTIN_PROFESSIONAL_TAX,
            "builtin:professional_tax.yaml",
        )?;

        Self::from_parts(rates, professional_tax)
    }

    fn from_parts(rates: StatutoryRates, professional_tax: ProfessionalTaxConfig) -> EngineResult<Self> {
        validate_rates(&rates)?;
        for (region, table) in &professional_tax.regions {
            validate_slabs(region, &table.slabs)?;
        }

        Ok(Self {
            config: StatutoryConfig::new(rates, professional_tax),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, origin: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &super::JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Gets a regional professional tax table by name or key.
    pub fn region(&self, region: &str) -> Option<&super::RegionalTaxTable> {
        self.config.professional_tax().region(region)
    }
}

/// Checks that every rate and share lies within `[0, 1]`.
fn validate_rates(rates: &StatutoryRates) -> EngineResult<()> {
    let checks = [
        ("provident_fund.employee_rate", rates.provident_fund.employee_rate),
        ("provident_fund.employer_epf_rate", rates.provident_fund.employer_epf_rate),
        ("provident_fund.employer_eps_rate", rates.provident_fund.employer_eps_rate),
        ("esic.employee_rate", rates.esic.employee_rate),
        ("esic.employer_rate", rates.esic.employer_rate),
        ("salary_split.basic_share", rates.salary_split.basic_share),
        ("salary_split.hra_share", rates.salary_split.hra_share),
        ("salary_split.special_allowance_share", rates.salary_split.special_allowance_share),
    ];

    for (name, value) in checks {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(EngineError::InvalidRate {
                name: name.to_string(),
                value,
            });
        }
    }

    Ok(())
}

/// Checks that a slab list is a contiguous partition of whole-unit salaries
/// over `[0, ∞)`, so that exactly one slab matches any non-negative salary.
pub(crate) fn validate_slabs(region: &str, slabs: &[TaxSlab]) -> EngineResult<()> {
    let invalid = |message: String| EngineError::InvalidTaxTable {
        region: region.to_string(),
        message,
    };

    let Some(first) = slabs.first() else {
        return Err(invalid("no slabs defined".to_string()));
    };
    if first.min != Decimal::ZERO {
        return Err(invalid(format!("first slab starts at {}, expected 0", first.min)));
    }

    let mut expected_min = Decimal::ZERO;
    for (index, slab) in slabs.iter().enumerate() {
        let position = index + 1;

        if slab.min != expected_min {
            return Err(invalid(format!(
                "slab {} starts at {}, expected {}",
                position, slab.min, expected_min
            )));
        }
        if slab.tax < Decimal::ZERO {
            return Err(invalid(format!("slab {} has negative tax {}", position, slab.tax)));
        }

        match slab.max {
            Some(max) if max < slab.min => {
                return Err(invalid(format!(
                    "slab {} ends at {} before it starts at {}",
                    position, max, slab.min
                )));
            }
            Some(max) => expected_min = max + Decimal::ONE,
            None if position != slabs.len() => {
                return Err(invalid(format!("slab {} is unbounded but not last", position)));
            }
            None => return Ok(()),
        }
    }

    Err(invalid("last slab must be unbounded (max: null)".to_string()))
}
