//! Application state for the payroll compliance API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::bank::{BankDirectory, HttpBankDirectory};
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded statutory configuration and the bank directory used by
/// `/banks/:ifsc`. The directory defaults to [`HttpBankDirectory`]; any other
/// [`BankDirectory`] can be plugged in.
pub struct AppState<D = HttpBankDirectory> {
    /// The loaded statutory configuration.
    config: Arc<ConfigLoader>,
    /// Bank branch lookup service.
    banks: Arc<D>,
}

impl<D: BankDirectory> AppState<D> {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, banks: D) -> Self {
        Self {
            config: Arc::new(config),
            banks: Arc::new(banks),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the bank directory.
    pub fn banks(&self) -> &D {
        &self.banks
    }
}

// Manual impl: cloning shares the Arcs and must not require `D: Clone`.
impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            banks: Arc::clone(&self.banks),
        }
    }
}
