//! Validation result model.
//!
//! This module defines [`ValidationResult`], the value every identifier
//! validator returns in place of an error.

use serde::Serialize;

/// The outcome of validating an identifier.
///
/// An error reason is present if and only if the result is invalid; the
/// constructors are the only way to build one.
///
/// # Example
///
/// ```
/// use payroll_compliance::models::ValidationResult;
///
/// let ok = ValidationResult::ok();
/// assert!(ok.is_valid());
/// assert_eq!(ok.error(), None);
///
/// let bad = ValidationResult::invalid("PAN must be exactly 10 characters");
/// assert!(!bad.is_valid());
/// assert_eq!(bad.error(), Some("PAN must be exactly 10 characters"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ValidationResult {
    /// Creates a successful result.
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// Creates a failed result with a human-readable reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(reason.into()),
        }
    }

    /// Returns true if the identifier was accepted.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the rejection reason, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_serializes_without_error_field() {
        let json = serde_json::to_string(&ValidationResult::ok()).unwrap();
        assert_eq!(json, r#"{"valid":true}"#);
    }

    #[test]
    fn test_invalid_serializes_error_field() {
        let json = serde_json::to_value(ValidationResult::invalid("bad length")).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["error"], "bad length");
    }
}
