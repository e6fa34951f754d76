//! Indian Financial System Code (IFSC) validation.
//!
//! An IFSC is 11 characters: a 4-letter bank code, a reserved `0`, and a
//! 6-character alphanumeric branch code.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::ValidationResult;

/// Number of characters in an IFSC.
pub const IFSC_LENGTH: usize = 11;

static IFSC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("IFSC pattern compiles"));

/// Validates an IFSC.
///
/// # Example
///
/// ```
/// use payroll_compliance::validation::validate_ifsc;
///
/// assert!(validate_ifsc("HDFC0001234").is_valid());
/// assert!(!validate_ifsc("HDFC1001234").is_valid());
/// ```
pub fn validate_ifsc(value: &str) -> ValidationResult {
    let code = value.trim();

    if code.chars().count() != IFSC_LENGTH {
        return ValidationResult::invalid("IFSC code must be exactly 11 characters");
    }

    if !IFSC_PATTERN.is_match(code) {
        return ValidationResult::invalid(
            "Invalid IFSC format (expected 4 letters, '0', then 6 letters or digits)",
        );
    }

    ValidationResult::ok()
}

/// A validated IFSC.
///
/// # Example
///
/// ```
/// use payroll_compliance::validation::IfscCode;
///
/// let code = IfscCode::parse("SBIN0005943").unwrap();
/// assert_eq!(code.bank_code(), "SBIN");
/// assert_eq!(code.branch_code(), "005943");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IfscCode(String);

impl IfscCode {
    /// Parses and validates an IFSC, returning the failed result on rejection.
    pub fn parse(value: &str) -> Result<Self, ValidationResult> {
        let result = validate_ifsc(value);
        if result.is_valid() {
            Ok(Self(value.trim().to_string()))
        } else {
            Err(result)
        }
    }

    /// The four-letter bank code.
    pub fn bank_code(&self) -> &str {
        &self.0[..4]
    }

    /// The six-character branch code.
    pub fn branch_code(&self) -> &str {
        &self.0[5..]
    }

    /// The full code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IfscCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
