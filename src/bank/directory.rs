//! The bank directory interface and the placeholder fallback policy.

use std::future::Future;

use tracing::{debug, warn};

use crate::models::BankDetails;
use crate::validation::validate_ifsc;

/// Errors from a bank directory lookup.
///
/// These never reach salary or contribution calculations:
/// [`resolve_bank_details`] replaces them with a placeholder record.
#[derive(Debug, thiserror::Error)]
pub enum BankLookupError {
    /// The HTTP client could not be constructed.
    #[error("failed to build bank directory client: {reason}")]
    ClientBuild {
        /// Why construction failed.
        reason: String,
    },

    /// The request could not be sent or the connection failed.
    #[error("bank directory request for {ifsc} failed: {reason}")]
    Transport {
        /// The code being looked up.
        ifsc: String,
        /// Description of the transport failure.
        reason: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("bank directory request for {ifsc} timed out after {elapsed_ms}ms")]
    Timeout {
        /// The code being looked up.
        ifsc: String,
        /// Configured timeout in milliseconds.
        elapsed_ms: u64,
    },

    /// The directory has no record for the code.
    #[error("no bank branch found for {ifsc}")]
    NotFound {
        /// The code being looked up.
        ifsc: String,
    },

    /// The directory answered with a non-2xx status other than 404.
    #[error("bank directory returned HTTP {status} for {ifsc}")]
    UnexpectedStatus {
        /// The code being looked up.
        ifsc: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded into a branch record.
    #[error("malformed bank directory response for {ifsc}: {reason}")]
    MalformedPayload {
        /// The code being looked up.
        ifsc: String,
        /// Description of the decoding failure.
        reason: String,
    },
}

/// A source of bank branch metadata keyed by IFSC.
///
/// Implementations may fail for any reason; callers that must not observe
/// failures go through [`resolve_bank_details`].
pub trait BankDirectory: Send + Sync {
    /// Looks up the branch record for a validated IFSC.
    fn lookup(
        &self,
        ifsc: &str,
    ) -> impl Future<Output = Result<BankDetails, BankLookupError>> + Send;
}

/// Resolves branch metadata, substituting [`BankDetails::placeholder`] on
/// any failure.
///
/// Codes that fail IFSC validation are never sent to the directory.
pub async fn resolve_bank_details<D: BankDirectory>(directory: &D, ifsc: &str) -> BankDetails {
    let ifsc = ifsc.trim();

    let validation = validate_ifsc(ifsc);
    if !validation.is_valid() {
        warn!(
            ifsc = %ifsc,
            reason = validation.error().unwrap_or_default(),
            "Skipping bank lookup for invalid IFSC"
        );
        return BankDetails::placeholder(ifsc);
    }

    debug!(ifsc = %ifsc, "Looking up bank branch");
    match directory.lookup(ifsc).await {
        Ok(details) => details,
        Err(err) => {
            warn!(ifsc = %ifsc, error = %err, "Bank lookup failed, using placeholder");
            BankDetails::placeholder(ifsc)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticDirectory {
        calls: AtomicUsize,
    }

    impl BankDirectory for StaticDirectory {
        async fn lookup(&self, ifsc: &str) -> Result<BankDetails, BankLookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(BankDetails {
                ifsc: ifsc.to_string(),
                bank: "HDFC Bank".to_string(),
                branch: "Fort".to_string(),
                address: "Manekji Wadia Building".to_string(),
                city: "Mumbai".to_string(),
                state: "Maharashtra".to_string(),
            })
        }
    }

    struct FailingDirectory;

    impl BankDirectory for FailingDirectory {
        async fn lookup(&self, ifsc: &str) -> Result<BankDetails, BankLookupError> {
            Err(BankLookupError::UnexpectedStatus {
                ifsc: ifsc.to_string(),
                status: 503,
            })
        }
    }

    #[tokio::test]
    async fn test_resolved_record_passed_through() {
        let directory = StaticDirectory {
            calls: AtomicUsize::new(0),
        };

        let details = resolve_bank_details(&directory, "HDFC0000001").await;

        assert_eq!(details.bank, "HDFC Bank");
        assert_eq!(details.city, "Mumbai");
        assert!(!details.is_placeholder());
        assert_eq!(directory.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_substitutes_placeholder() {
        let details = resolve_bank_details(&FailingDirectory, "HDFC0000001").await;

        assert_eq!(details, BankDetails::placeholder("HDFC0000001"));
    }

    #[tokio::test]
    async fn test_invalid_code_skips_directory() {
        let directory = StaticDirectory {
            calls: AtomicUsize::new(0),
        };

        let details = resolve_bank_details(&directory, "not-an-ifsc").await;

        assert!(details.is_placeholder());
        assert_eq!(directory.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_error_display_includes_code() {
        let err = BankLookupError::NotFound {
            ifsc: "HDFC0000001".to_string(),
        };
        assert_eq!(err.to_string(), "no bank branch found for HDFC0000001");

        let err = BankLookupError::Timeout {
            ifsc: "HDFC0000001".to_string(),
            elapsed_ms: 5000,
        };
        assert!(err.to_string().contains("5000"));
    }
}
