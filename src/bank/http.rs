//! HTTP implementation of the bank directory.
//!
//! Queries an IFSC lookup service that answers `GET {base_url}/{IFSC}` with
//! a JSON object carrying upper-case `BANK`, `BRANCH`, `ADDRESS`, `CITY`
//! and `STATE` fields. The default base URL is the public Razorpay IFSC API.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::models::BankDetails;

use super::directory::{BankDirectory, BankLookupError};

/// Public IFSC lookup service.
pub const DEFAULT_BANK_DIRECTORY_URL: &str = "https://ifsc.razorpay.com";

/// Request timeout used when none is configured.
pub const DEFAULT_BANK_DIRECTORY_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`HttpBankDirectory`].
#[derive(Debug, Clone)]
pub struct BankDirectoryConfig {
    /// Base URL of the lookup service.
    pub base_url: String,
    /// Request timeout (default: 10 seconds).
    pub timeout: Duration,
}

impl BankDirectoryConfig {
    /// Creates a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_BANK_DIRECTORY_TIMEOUT,
        }
    }

    /// Replaces the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for BankDirectoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BANK_DIRECTORY_URL)
    }
}

/// Branch record as returned by the lookup service.
#[derive(Debug, Deserialize)]
struct BranchRecord {
    #[serde(rename = "BANK")]
    bank: String,
    #[serde(rename = "BRANCH")]
    branch: String,
    #[serde(rename = "ADDRESS", default)]
    address: String,
    #[serde(rename = "CITY", default)]
    city: String,
    #[serde(rename = "STATE", default)]
    state: String,
}

/// Bank directory backed by an HTTP lookup service.
#[derive(Debug, Clone)]
pub struct HttpBankDirectory {
    client: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
}

impl HttpBankDirectory {
    /// Creates a new HTTP bank directory from configuration.
    pub fn new(config: BankDirectoryConfig) -> Result<Self, BankLookupError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BankLookupError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_ms: u64::try_from(config.timeout.as_millis()).unwrap_or(u64::MAX),
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl BankDirectory for HttpBankDirectory {
    async fn lookup(&self, ifsc: &str) -> Result<BankDetails, BankLookupError> {
        let url = format!("{}/{}", self.base_url, ifsc);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                BankLookupError::Timeout {
                    ifsc: ifsc.to_string(),
                    elapsed_ms: self.timeout_ms,
                }
            } else {
                BankLookupError::Transport {
                    ifsc: ifsc.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(BankLookupError::NotFound {
                ifsc: ifsc.to_string(),
            });
        }
        if !status.is_success() {
            return Err(BankLookupError::UnexpectedStatus {
                ifsc: ifsc.to_string(),
                status: status.as_u16(),
            });
        }

        let record: BranchRecord =
            response
                .json()
                .await
                .map_err(|e| BankLookupError::MalformedPayload {
                    ifsc: ifsc.to_string(),
                    reason: e.to_string(),
                })?;

        Ok(BankDetails {
            ifsc: ifsc.to_string(),
            bank: record.bank,
            branch: record.branch,
            address: record.address,
            city: record.city,
            state: record.state,
        })
    }
}
