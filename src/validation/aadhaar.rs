//! Aadhaar number validation and masking.
//!
//! An Aadhaar number is 12 digits, never starts with 0 or 1, and carries a
//! Verhoeff check digit in the last position. Callers may supply it grouped
//! with spaces or hyphens (`2341 2341 2346`, `2341-2341-2346`).

use crate::models::ValidationResult;

use super::verhoeff::verhoeff_validate;

/// Number of digits in an Aadhaar number.
pub const AADHAAR_LENGTH: usize = 12;

const VISIBLE_DIGITS: usize = 4;
const GROUP_SIZE: usize = 4;
const MASK_GROUP: &str = "XXXX";

/// Removes whitespace and hyphen separators.
fn strip_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Validates an Aadhaar number.
///
/// Failures are reported in order: wrong length or non-digit characters,
/// reserved leading digit, checksum mismatch.
///
/// # Example
///
/// ```
/// use payroll_compliance::validation::validate_aadhaar;
///
/// assert!(validate_aadhaar("2341 2341 2346").is_valid());
///
/// let result = validate_aadhaar("2341 2341 2345");
/// assert_eq!(result.error(), Some("Invalid Aadhaar number (checksum failed)"));
/// ```
pub fn validate_aadhaar(value: &str) -> ValidationResult {
    let digits = strip_separators(value);

    if digits.len() != AADHAAR_LENGTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return ValidationResult::invalid("Aadhaar number must be exactly 12 digits");
    }

    if digits.starts_with(['0', '1']) {
        return ValidationResult::invalid("Aadhaar number cannot start with 0 or 1");
    }

    if !verhoeff_validate(&digits) {
        return ValidationResult::invalid("Invalid Aadhaar number (checksum failed)");
    }

    ValidationResult::ok()
}

/// Masks an identifier so only its last four digits remain visible.
///
/// Separators are stripped first; every preceding group of up to four
/// digits is replaced by `XXXX` and groups are joined with hyphens.
/// Values with four or fewer digits are returned unmasked.
///
/// # Example
///
/// ```
/// use payroll_compliance::validation::mask_aadhaar;
///
/// assert_eq!(mask_aadhaar("2341 2341 2346"), "XXXX-XXXX-2346");
/// ```
pub fn mask_aadhaar(value: &str) -> String {
    let digits = strip_separators(value);
    let chars: Vec<char> = digits.chars().collect();

    if chars.len() <= VISIBLE_DIGITS {
        return digits;
    }

    let hidden = chars.len() - VISIBLE_DIGITS;
    let visible: String = chars[hidden..].iter().collect();

    let mut groups = vec![MASK_GROUP; hidden.div_ceil(GROUP_SIZE)];
    groups.push(&visible);
    groups.join("-")
}
