//! Permanent Account Number (PAN) validation.
//!
//! A PAN is ten characters: three letters, an entity-type code, the first
//! letter of the holder's surname or name, four digits and a final letter.
//! No checksum is defined.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::ValidationResult;

/// Number of characters in a PAN.
pub const PAN_LENGTH: usize = 10;

/// Fourth-character codes for the legal entity holding the PAN.
///
/// A: association of persons, B: body of individuals, C: company, F: firm,
/// G: government, H: Hindu undivided family, J: artificial juridical person,
/// L: local authority, P: individual, T: trust.
pub const PAN_ENTITY_CODES: [char; 10] = ['A', 'B', 'C', 'F', 'G', 'H', 'J', 'L', 'P', 'T'];

static PAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{3}[ABCFGHJLPT][A-Z][0-9]{4}[A-Z]$").expect("PAN pattern compiles")
});

/// Validates a PAN.
///
/// # Example
///
/// ```
/// use payroll_compliance::validation::validate_pan;
///
/// assert!(validate_pan("ABCPE1234F").is_valid());
/// assert!(!validate_pan("ABCXE1234F").is_valid());
/// ```
pub fn validate_pan(value: &str) -> ValidationResult {
    let pan = value.trim();

    if pan.chars().count() != PAN_LENGTH {
        return ValidationResult::invalid("PAN must be exactly 10 characters");
    }

    if !PAN_PATTERN.is_match(pan) {
        return ValidationResult::invalid(
            "Invalid PAN format (expected AAAPA1234A: 3 letters, entity code, letter, 4 digits, letter)",
        );
    }

    ValidationResult::ok()
}
