//! Integration tests for the payroll compliance API.
//!
//! This test suite drives the router end to end:
//! - Identifier validation (PAN, Aadhaar, IFSC, UAN)
//! - Provident fund, ESIC, professional tax and gratuity
//! - Salary structure synthesis
//! - Bank lookup against a mocked directory
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use payroll_compliance::api::{AppState, create_router};
use payroll_compliance::bank::{
    BankDirectory, BankDirectoryConfig, BankLookupError, HttpBankDirectory,
};
use payroll_compliance::config::ConfigLoader;
use payroll_compliance::models::BankDetails;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state(bank_directory_url: &str) -> AppState {
    let config = ConfigLoader::load("./config/india").expect("Failed to load config");
    let banks = HttpBankDirectory::new(BankDirectoryConfig::new(bank_directory_url))
        .expect("Failed to build bank directory");
    AppState::new(config, banks)
}

fn create_router_for_test() -> Router {
    // Nothing outside the bank tests reaches the directory.
    create_router(create_test_state("http://127.0.0.1:9"))
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

fn assert_amount(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .unwrap_or_else(|| panic!("Expected decimal string, got {}", value));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    read_json(response).await
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    read_json(response).await
}

// =============================================================================
// SECTION 1: Identifier Validation
// =============================================================================

#[tokio::test]
async fn test_validate_pan_accepted() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/validate",
        json!({"kind": "pan", "value": "ABCPE1234F"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["kind"], "pan");
    assert_eq!(result["valid"], true);
    assert!(result.get("error").is_none());
    assert!(result.get("masked").is_none());
}

#[tokio::test]
async fn test_validate_pan_rejected_with_reason() {
    let router = create_router_for_test();
    // Fourth character must be an entity code.
    let (status, result) = post_json(
        router,
        "/validate",
        json!({"kind": "pan", "value": "ABCDE1234F"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["valid"], false);
    assert!(result["error"].as_str().unwrap().contains("Invalid PAN format"));
}

#[tokio::test]
async fn test_validate_aadhaar_returns_masked_form() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/validate",
        json!({"kind": "aadhaar", "value": "2341 2341 2346"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["valid"], true);
    assert_eq!(result["masked"], "XXXX-XXXX-2346");
}

#[tokio::test]
async fn test_validate_aadhaar_checksum_failure_not_masked() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/validate",
        json!({"kind": "aadhaar", "value": "234123412345"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["valid"], false);
    assert_eq!(result["error"], "Invalid Aadhaar number (checksum failed)");
    assert!(result.get("masked").is_none());
}

#[tokio::test]
async fn test_validate_ifsc_and_uan() {
    let (_, ifsc) = post_json(
        create_router_for_test(),
        "/validate",
        json!({"kind": "ifsc", "value": "SBIN0005943"}),
    )
    .await;
    assert_eq!(ifsc["valid"], true);

    let (_, uan) = post_json(
        create_router_for_test(),
        "/validate",
        json!({"kind": "uan", "value": "10012345678"}),
    )
    .await;
    assert_eq!(uan["valid"], false);
    assert_eq!(uan["error"], "UAN must be exactly 12 digits");
}

#[tokio::test]
async fn test_validate_unknown_kind() {
    let router = create_router_for_test();
    let (status, error) = post_json(
        router,
        "/validate",
        json!({"kind": "passport", "value": "K1234567"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

// =============================================================================
// SECTION 2: Statutory Contributions
// =============================================================================

#[tokio::test]
async fn test_provident_fund_capped_at_ceiling() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/contributions/provident-fund",
        json!({"basic": "20000"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["applicable_wage"], "15000");
    assert_eq!(result["wage_capped"], true);
    assert_amount(&result["employee_contribution"], "1800");
    assert_amount(&result["employer_epf_contribution"], "551");
    assert_amount(&result["employer_eps_contribution"], "1250");
    assert_amount(&result["employer_contribution"], "1801");
    assert_amount(&result["total_contribution"], "3601");
}

#[tokio::test]
async fn test_provident_fund_includes_dearness_allowance() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/contributions/provident-fund",
        json!({"basic": 10000, "dearness_allowance": 2000}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["applicable_wage"], "12000");
    assert_eq!(result["wage_capped"], false);
    assert_amount(&result["employee_contribution"], "1440");
    assert_amount(&result["employer_epf_contribution"], "440");
    assert_amount(&result["employer_eps_contribution"], "1000");
    assert_amount(&result["total_contribution"], "2880");
}

#[tokio::test]
async fn test_esic_at_threshold_applies() {
    let router = create_router_for_test();
    let (status, result) =
        post_json(router, "/contributions/esic", json!({"gross_salary": "21000"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["applicable"], true);
    assert_amount(&result["employee_contribution"], "158");
    assert_amount(&result["employer_contribution"], "683");
    assert_amount(&result["total_contribution"], "841");
}

#[tokio::test]
async fn test_esic_above_threshold_not_applicable() {
    let router = create_router_for_test();
    let (status, result) =
        post_json(router, "/contributions/esic", json!({"gross_salary": "21001"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["applicable"], false);
    assert!(result["reason"].as_str().unwrap().contains("21000"));
    assert!(result.get("employee_contribution").is_none());
}

#[tokio::test]
async fn test_professional_tax_maharashtra_slab() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/contributions/professional-tax",
        json!({"monthly_salary": "9000", "region": "Maharashtra"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["tax"], "175");
    assert_amount(&result["slab"]["min"], "7501");
    assert_amount(&result["slab"]["max"], "10000");
    assert!(result.get("note").is_none());
}

#[tokio::test]
async fn test_professional_tax_region_key_normalised() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/contributions/professional-tax",
        json!({"monthly_salary": "50000", "region": "West Bengal"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["tax"], "200");
}

#[tokio::test]
async fn test_professional_tax_unknown_region() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/contributions/professional-tax",
        json!({"monthly_salary": "50000", "region": "Delhi"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["tax"], "0");
    assert_eq!(
        result["note"],
        "Professional tax not applicable in this region"
    );
}

#[tokio::test]
async fn test_gratuity_five_years() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/contributions/gratuity",
        json!({"last_drawn_salary": "50000", "years_of_service": "5"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["eligible"], true);
    assert_amount(&result["amount"], "144231");
    assert_eq!(result["capped"], false);
}

#[tokio::test]
async fn test_gratuity_below_minimum_service() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/contributions/gratuity",
        json!({"last_drawn_salary": "50000", "years_of_service": "4.99"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["eligible"], false);
    assert_amount(&result["amount"], "0");
    assert!(result["message"].as_str().unwrap().contains("5"));
}

#[tokio::test]
async fn test_gratuity_capped_at_statutory_maximum() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/contributions/gratuity",
        json!({"last_drawn_salary": "500000", "years_of_service": "20"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["amount"], "2000000");
    assert_eq!(result["capped"], true);
}

// =============================================================================
// SECTION 3: Salary Structure
// =============================================================================

#[tokio::test]
async fn test_salary_structure_six_lakh() {
    let router = create_router_for_test();
    let (status, result) =
        post_json(router, "/salary-structure", json!({"ctc": "600000"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["components"]["basic"], "240000");
    assert_amount(&result["components"]["hra"], "120000");
    assert_amount(&result["components"]["special_allowance"], "150000");
    assert_amount(&result["components"]["gross"], "510000");
    assert_amount(&result["deductions"]["epf"], "1800");
    assert_amount(&result["deductions"]["esic"], "0");
    assert_amount(&result["net_salary"], "508200");
    assert_amount(&result["monthly_gross"], "42500");
    assert_amount(&result["monthly_net"], "42350");
}

#[tokio::test]
async fn test_salary_structure_with_esic() {
    let router = create_router_for_test();
    let (status, result) = post_json(router, "/salary-structure", json!({"ctc": 24000})).await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["components"]["gross"], "20400");
    assert_amount(&result["deductions"]["epf"], "1152");
    assert_amount(&result["deductions"]["esic"], "153");
    assert_amount(&result["deductions"]["total"], "1305");
    assert_amount(&result["employer_contributions"]["esic"], "663");
    assert_amount(&result["net_salary"], "19095");
}

// =============================================================================
// SECTION 4: Bank Lookup
// =============================================================================

#[tokio::test]
async fn test_bank_lookup_resolved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/HDFC0000001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "BANK": "HDFC Bank",
            "BRANCH": "Fort",
            "ADDRESS": "Manekji Wadia Building, Nanik Motwani Marg",
            "CITY": "Mumbai",
            "STATE": "Maharashtra"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let router = create_router(create_test_state(&server.uri()));
    let (status, result) = get_json(router, "/banks/HDFC0000001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["ifsc"], "HDFC0000001");
    assert_eq!(result["bank"], "HDFC Bank");
    assert_eq!(result["branch"], "Fort");
    assert_eq!(result["city"], "Mumbai");
}

#[tokio::test]
async fn test_bank_lookup_failure_returns_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let router = create_router(create_test_state(&server.uri()));
    let (status, result) = get_json(router, "/banks/HDFC0000001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["bank"], "Unknown Bank");
    assert_eq!(result["branch"], "Unknown Branch");
    assert_eq!(result["address"], "Not available");
    assert_eq!(result["city"], "Not available");
    assert_eq!(result["state"], "Not available");
}

#[tokio::test]
async fn test_bank_lookup_unreachable_directory_returns_placeholder() {
    let router = create_router_for_test();
    let (status, result) = get_json(router, "/banks/SBIN0005943").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["ifsc"], "SBIN0005943");
    assert_eq!(result["bank"], "Unknown Bank");
}

#[tokio::test]
async fn test_bank_lookup_invalid_code_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let router = create_router(create_test_state(&server.uri()));
    let (status, error) = get_json(router, "/banks/HDFC1000001").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_IFSC");
}

/// Directory answering from memory, for routers without a network collaborator.
struct StaticDirectory;

impl BankDirectory for StaticDirectory {
    async fn lookup(&self, ifsc: &str) -> Result<BankDetails, BankLookupError> {
        if ifsc != "HDFC0000001" {
            return Err(BankLookupError::NotFound {
                ifsc: ifsc.to_string(),
            });
        }
        Ok(BankDetails {
            ifsc: ifsc.to_string(),
            bank: "HDFC Bank".to_string(),
            branch: "Sandoz House".to_string(),
            address: "Dr Annie Besant Road, Worli".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
        })
    }
}

#[tokio::test]
async fn test_bank_lookup_with_in_process_directory() {
    let config = ConfigLoader::load("./config/india").expect("Failed to load config");
    let router = create_router(AppState::new(config, StaticDirectory));

    let (status, result) = get_json(router.clone(), "/banks/HDFC0000001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["bank"], "HDFC Bank");
    assert_eq!(result["city"], "Mumbai");

    let (status, result) = get_json(router, "/banks/SBIN0005943").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["bank"], "Unknown Bank");
}

// =============================================================================
// SECTION 5: Error Cases
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contributions/esic")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, error) = read_json(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_field() {
    let router = create_router_for_test();
    let (status, error) = post_json(
        router,
        "/contributions/gratuity",
        json!({"last_drawn_salary": "50000"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_negative_salary() {
    let router = create_router_for_test();
    let (status, error) = post_json(
        router,
        "/contributions/provident-fund",
        json!({"basic": "-100"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
    assert!(error["message"].as_str().unwrap().contains("basic"));
}

#[tokio::test]
async fn test_error_gratuity_salary_beyond_range() {
    let router = create_router_for_test();
    let (status, error) = post_json(
        router,
        "/contributions/gratuity",
        json!({"last_drawn_salary": "10000000000000000000000000000", "years_of_service": "10"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
    assert!(error["message"].as_str().unwrap().contains("last_drawn_salary"));
}

#[tokio::test]
async fn test_error_provident_fund_wage_beyond_range() {
    let router = create_router_for_test();
    let (status, error) = post_json(
        router,
        "/contributions/provident-fund",
        json!({
            "basic": "79228162514264337593543950335",
            "dearness_allowance": "79228162514264337593543950335"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_error_ctc_beyond_range() {
    let router = create_router_for_test();
    let (status, error) = post_json(
        router,
        "/salary-structure",
        json!({"ctc": "10000000000000000000000000000"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
    assert!(error["message"].as_str().unwrap().contains("ctc"));
}

#[tokio::test]
async fn test_largest_accepted_amounts_still_answer() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/contributions/provident-fund",
        json!({"basic": "1000000000000000", "dearness_allowance": "1000000000000000"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["total_contribution"], "3601");

    // 10^15 x 10^15 leaves the decimal range inside the formula.
    let (status, result) = post_json(
        create_router_for_test(),
        "/contributions/gratuity",
        json!({"last_drawn_salary": "1000000000000000", "years_of_service": "1000000000000000"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["amount"], "2000000");
    assert_eq!(result["capped"], true);
}

#[tokio::test]
async fn test_error_zero_ctc() {
    let router = create_router_for_test();
    let (status, error) = post_json(router, "/salary-structure", json!({"ctc": "0"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
    assert!(error["message"].as_str().unwrap().contains("ctc"));
}

#[tokio::test]
async fn test_error_missing_content_type() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/salary-structure")
                .body(Body::from(r#"{"ctc": "600000"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, error) = read_json(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MISSING_CONTENT_TYPE");
}
