//! Bank branch metadata model.

use serde::{Deserialize, Serialize};

/// Value used for every field the placeholder record cannot know.
pub const UNAVAILABLE: &str = "Not available";

/// Bank and branch metadata resolved from an IFSC code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    /// The IFSC code the record was resolved for.
    pub ifsc: String,
    /// Bank name.
    pub bank: String,
    /// Branch name.
    pub branch: String,
    /// Branch street address.
    pub address: String,
    /// Branch city.
    pub city: String,
    /// Branch state.
    pub state: String,
}

impl BankDetails {
    /// The record substituted when the bank directory cannot resolve a code.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_compliance::models::BankDetails;
    ///
    /// let details = BankDetails::placeholder("HDFC0001234");
    /// assert_eq!(details.bank, "Unknown Bank");
    /// assert!(details.is_placeholder());
    /// ```
    pub fn placeholder(ifsc: &str) -> Self {
        Self {
            ifsc: ifsc.to_string(),
            bank: "Unknown Bank".to_string(),
            branch: "Unknown Branch".to_string(),
            address: UNAVAILABLE.to_string(),
            city: UNAVAILABLE.to_string(),
            state: UNAVAILABLE.to_string(),
        }
    }

    /// Returns true if this record is the placeholder for its code.
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder(&self.ifsc)
    }
}
