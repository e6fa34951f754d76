//! HTTP request handlers for the payroll compliance API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::bank::{BankDirectory, resolve_bank_details};
use crate::calculation::{
    calculate_esic, calculate_gratuity, calculate_professional_tax, calculate_provident_fund,
    try_synthesize_salary_structure,
};
use crate::error::EngineError;
use crate::validation::{IdentifierKind, mask_aadhaar, validate_identifier, validate_ifsc};

use super::request::{
    EsicRequest, GratuityRequest, ProfessionalTaxRequest, ProvidentFundRequest,
    SalaryStructureRequest, ValidateRequest,
};
use super::response::{ApiError, ApiErrorResponse, ValidateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<D: BankDirectory + 'static>(state: AppState<D>) -> Router {
    Router::new()
        .route("/validate", post(validate_handler))
        .route(
            "/contributions/provident-fund",
            post(provident_fund_handler::<D>),
        )
        .route("/contributions/esic", post(esic_handler::<D>))
        .route(
            "/contributions/professional-tax",
            post(professional_tax_handler::<D>),
        )
        .route("/contributions/gratuity", post(gratuity_handler::<D>))
        .route("/salary-structure", post(salary_structure_handler::<D>))
        .route("/banks/:ifsc", get(bank_handler::<D>))
        .with_state(state)
}

/// Writes a 200 JSON response.
fn ok_json<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Unwraps a JSON body or converts the rejection into a 400 response.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}

/// Logs a rejected input and converts it into an error response.
fn reject(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Handler for POST /validate.
///
/// Always answers 200 for a well-formed request; the body says whether the
/// identifier is valid. Valid Aadhaar numbers also carry their masked form.
async fn validate_handler(payload: Result<Json<ValidateRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };

    let result = validate_identifier(request.kind, &request.value);
    let masked = (request.kind == IdentifierKind::Aadhaar && result.is_valid())
        .then(|| mask_aadhaar(&request.value));

    // The raw value is never logged; Aadhaar numbers are personal data.
    info!(
        correlation_id = %correlation_id,
        kind = ?request.kind,
        valid = result.is_valid(),
        "Identifier validated"
    );

    ok_json(ValidateResponse {
        kind: request.kind,
        result,
        masked,
    })
}

/// Handler for POST /contributions/provident-fund.
async fn provident_fund_handler<D: BankDirectory>(
    State(state): State<AppState<D>>,
    payload: Result<Json<ProvidentFundRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    if let Err(err) = request.validate() {
        return reject(correlation_id, err);
    }

    let start_time = Instant::now();
    let result = calculate_provident_fund(
        request.basic,
        request.dearness_allowance,
        state.config().config().provident_fund(),
    );
    info!(
        correlation_id = %correlation_id,
        applicable_wage = %result.applicable_wage,
        total_contribution = %result.total_contribution,
        duration_us = start_time.elapsed().as_micros(),
        "Provident fund calculated"
    );

    ok_json(result)
}

/// Handler for POST /contributions/esic.
async fn esic_handler<D: BankDirectory>(
    State(state): State<AppState<D>>,
    payload: Result<Json<EsicRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    if let Err(err) = request.validate() {
        return reject(correlation_id, err);
    }

    let start_time = Instant::now();
    let result = calculate_esic(request.gross_salary, state.config().config().esic());
    info!(
        correlation_id = %correlation_id,
        applicable = result.is_applicable(),
        duration_us = start_time.elapsed().as_micros(),
        "ESIC calculated"
    );

    ok_json(result)
}

/// Handler for POST /contributions/professional-tax.
async fn professional_tax_handler<D: BankDirectory>(
    State(state): State<AppState<D>>,
    payload: Result<Json<ProfessionalTaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    if let Err(err) = request.validate() {
        return reject(correlation_id, err);
    }

    let start_time = Instant::now();
    let result = calculate_professional_tax(
        request.monthly_salary,
        &request.region,
        state.config().config().professional_tax(),
    );
    info!(
        correlation_id = %correlation_id,
        region = %result.region,
        tax = %result.tax,
        duration_us = start_time.elapsed().as_micros(),
        "Professional tax calculated"
    );

    ok_json(result)
}

/// Handler for POST /contributions/gratuity.
async fn gratuity_handler<D: BankDirectory>(
    State(state): State<AppState<D>>,
    payload: Result<Json<GratuityRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    if let Err(err) = request.validate() {
        return reject(correlation_id, err);
    }

    let start_time = Instant::now();
    let result = calculate_gratuity(
        request.last_drawn_salary,
        request.years_of_service,
        state.config().config().gratuity(),
    );
    info!(
        correlation_id = %correlation_id,
        eligible = result.eligible,
        amount = %result.amount,
        capped = result.capped,
        duration_us = start_time.elapsed().as_micros(),
        "Gratuity calculated"
    );

    ok_json(result)
}

/// Handler for POST /salary-structure.
async fn salary_structure_handler<D: BankDirectory>(
    State(state): State<AppState<D>>,
    payload: Result<Json<SalaryStructureRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    if let Err(err) = request.validate() {
        return reject(correlation_id, err);
    }

    let start_time = Instant::now();
    match try_synthesize_salary_structure(request.ctc, state.config().config()) {
        Ok(structure) => {
            info!(
                correlation_id = %correlation_id,
                ctc = %structure.ctc,
                gross = %structure.components.gross,
                net_salary = %structure.net_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Salary structure synthesized"
            );
            ok_json(structure)
        }
        Err(err) => reject(correlation_id, err),
    }
}

/// Handler for GET /banks/:ifsc.
///
/// Malformed codes are a client error. For well-formed codes the directory
/// is consulted and any lookup failure yields the placeholder record.
async fn bank_handler<D: BankDirectory>(
    State(state): State<AppState<D>>,
    Path(ifsc): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let ifsc = ifsc.trim();

    let validation = validate_ifsc(ifsc);
    if let Some(reason) = validation.error() {
        warn!(
            correlation_id = %correlation_id,
            ifsc = %ifsc,
            reason = %reason,
            "Invalid IFSC"
        );
        return ApiErrorResponse::bad_request(ApiError::invalid_ifsc(ifsc, reason))
            .into_response();
    }

    let start_time = Instant::now();
    let details = resolve_bank_details(state.banks(), ifsc).await;
    info!(
        correlation_id = %correlation_id,
        ifsc = %ifsc,
        placeholder = details.is_placeholder(),
        duration_us = start_time.elapsed().as_micros(),
        "Bank details resolved"
    );

    ok_json(details)
}
