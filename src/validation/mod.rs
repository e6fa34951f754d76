//! Identifier validators for Indian payroll records.
//!
//! Every validator takes a raw string and returns a
//! [`ValidationResult`](crate::models::ValidationResult); none of them panic
//! or return errors, so form handlers can keep accepting input after a
//! rejection.

mod aadhaar;
mod ifsc;
mod pan;
mod uan;
mod verhoeff;

use serde::{Deserialize, Serialize};

use crate::models::ValidationResult;

pub use aadhaar::{AADHAAR_LENGTH, mask_aadhaar, validate_aadhaar};
pub use ifsc::{IFSC_LENGTH, IfscCode, validate_ifsc};
pub use pan::{PAN_ENTITY_CODES, PAN_LENGTH, validate_pan};
pub use uan::{UAN_LENGTH, validate_uan};
pub use verhoeff::{verhoeff_check_digit, verhoeff_validate};

/// The identifier kinds the engine can validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Permanent Account Number (tax account).
    Pan,
    /// Aadhaar national identity number.
    Aadhaar,
    /// Bank branch routing code.
    Ifsc,
    /// Universal Account Number (provident fund account).
    Uan,
}

/// Validates `value` as an identifier of the given kind.
///
/// # Example
///
/// ```
/// use payroll_compliance::validation::{IdentifierKind, validate_identifier};
///
/// assert!(validate_identifier(IdentifierKind::Ifsc, "SBIN0005943").is_valid());
/// ```
pub fn validate_identifier(kind: IdentifierKind, value: &str) -> ValidationResult {
    match kind {
        IdentifierKind::Pan => validate_pan(value),
        IdentifierKind::Aadhaar => validate_aadhaar(value),
        IdentifierKind::Ifsc => validate_ifsc(value),
        IdentifierKind::Uan => validate_uan(value),
    }
}
