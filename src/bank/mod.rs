//! Bank branch metadata lookup.
//!
//! The lookup is an external collaborator: it may fail for any reason, and
//! [`resolve_bank_details`] degrades every failure to a placeholder record
//! so that callers can always proceed.

mod directory;
mod http;

pub use directory::{BankDirectory, BankLookupError, resolve_bank_details};
pub use http::{
    BankDirectoryConfig, DEFAULT_BANK_DIRECTORY_TIMEOUT, DEFAULT_BANK_DIRECTORY_URL,
    HttpBankDirectory,
};
