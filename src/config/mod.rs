//! Statutory configuration for the payroll compliance engine.
//!
//! This module loads contribution rates, the CTC split and the regional
//! professional tax tables from YAML files.
//!
//! # Example
//!
//! ```
//! use payroll_compliance::config::ConfigLoader;
//!
//! let config = ConfigLoader::builtin().unwrap();
//! println!("Loaded rules for: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EsicRates, GratuityRates, JurisdictionMetadata, ProfessionalTaxConfig, ProvidentFundRates,
    RegionalTaxTable, SalarySplit, StatutoryConfig, StatutoryRates, TaxSlab, normalize_region_key,
};
