//! Universal Account Number (provident fund account) validation.

use crate::models::ValidationResult;

/// Number of digits in a UAN.
pub const UAN_LENGTH: usize = 12;

/// Validates a UAN: exactly 12 digits, no checksum.
///
/// # Example
///
/// ```
/// use payroll_compliance::validation::validate_uan;
///
/// assert!(validate_uan("100123456789").is_valid());
/// assert!(!validate_uan("10012345678").is_valid());
/// ```
pub fn validate_uan(value: &str) -> ValidationResult {
    let uan = value.trim();

    if uan.len() != UAN_LENGTH || !uan.bytes().all(|b| b.is_ascii_digit()) {
        return ValidationResult::invalid("UAN must be exactly 12 digits");
    }

    ValidationResult::ok()
}
