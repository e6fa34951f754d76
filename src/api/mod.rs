//! HTTP API module for the payroll compliance engine.
//!
//! This module exposes the identifier validators, contribution calculators,
//! salary structure synthesizer and bank lookup as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    EsicRequest, GratuityRequest, MAX_REQUEST_AMOUNT, ProfessionalTaxRequest,
    ProvidentFundRequest, SalaryStructureRequest, ValidateRequest,
};
pub use response::{ApiError, ApiErrorResponse, ValidateResponse};
pub use state::AppState;
