//! Statutory compliance and payroll calculation engine for India
//!
//! This crate validates Indian payroll identifiers (PAN, Aadhaar, IFSC, UAN),
//! computes statutory contributions (provident fund, ESIC, regional
//! professional tax, gratuity), and derives a salary structure from an annual
//! cost-to-company figure. Bank branch metadata is resolved through a
//! best-effort directory lookup, and the [`api`] module exposes everything
//! over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod bank;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
