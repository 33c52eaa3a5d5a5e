use super::*;
use crate::config::ValidatorConfig;
use crate::handlers::validation::dnsmx::MockDnsLookup;
use actix_web::{App, http::StatusCode, test};
use serde_json::{Value, json};

fn validator(reachable: &'static [&'static str]) -> web::Data<EmailValidator> {
    web::Data::new(EmailValidator::with_resolver(
        ValidatorConfig::default(),
        Box::new(MockDnsLookup::reachable(reachable)),
    ))
}

async fn post_json(
    reachable: &'static [&'static str],
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    // Set up test app
    let app = test::init_service(
        App::new()
            .app_data(validator(reachable))
            .configure(configure_routes),
    )
    .await;

    // Send request
    let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn test_valid_email() {
    let (status, body) = post_json(
        &["example.com"],
        "/validate-email",
        json!({ "email": "jane@example.com" }),
    )
    .await;

    // Verify status code and body
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], true);
    assert!(body["code"].is_null());
    assert!(body["reason"].is_null());
    assert!(body["suggestion"].is_null());
}

#[actix_web::test]
async fn test_missing_email() {
    let (status, body) = post_json(&[], "/validate-email", json!({ "email": "   " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EMAIL_REQUIRED");
    assert_eq!(body["reason"], "Email address is required.");
}

#[actix_web::test]
async fn test_invalid_syntax_with_suggestion() {
    let (status, body) =
        post_json(&[], "/validate-email", json!({ "email": "user@gmail..com" })).await;

    // DNS is never reached for a syntax error

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["is_valid"], false);
    assert_eq!(body["code"], "INVALID_SYNTAX");
    assert_eq!(body["suggestion"], "user@gmail.com");
}

#[actix_web::test]
async fn test_unreachable_domain_with_suggestion() {
    let (status, body) =
        post_json(&["gmail.com"], "/validate-email", json!({ "email": "user@gmial.com" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DOMAIN");
    assert_eq!(body["suggestion"], "user@gmail.com");
}

#[actix_web::test]
async fn test_disposable_email() {
    let (status, body) = post_json(
        &["mailinator.com"],
        "/validate-email",
        json!({ "email": "user@mailinator.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DISPOSABLE_EMAIL");
    // Policy rejections never carry a suggestion
    assert!(body["suggestion"].is_null());
}

#[actix_web::test]
async fn test_risky_email() {
    let (status, body) = post_json(
        &["example.com"],
        "/validate-email",
        json!({ "email": "test@example.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "RISKY_EMAIL");
    assert!(body["suggestion"].is_null());
}

#[actix_web::test]
async fn test_malformed_body_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(validator(&[]))
            .configure(configure_routes),
    )
    .await;

    // Wrong field name
    let req = test::TestRequest::post()
        .uri("/validate-email")
        .set_json(json!({ "address": "user@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Should be rejected by the JSON extractor
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_bulk_validation() {
    let (status, body) = post_json(
        &["example.com", "gmail.com"],
        "/validate-emails-bulk",
        json!({ "emails": ["jane@example.com", "user@gmial.com", "", "fake@example.com"] }),
    )
    .await;

    // Verify counts
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid_count"], 1);
    assert_eq!(body["invalid_count"], 3);

    // Results keep the request order
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    assert_eq!(results[0]["email"], "jane@example.com");
    assert_eq!(results[0]["validation"]["is_valid"], true);
    assert_eq!(results[1]["validation"]["suggestion"], "user@gmail.com");
    assert_eq!(results[2]["validation"]["code"], "EMAIL_REQUIRED");
    assert_eq!(results[3]["validation"]["code"], "RISKY_EMAIL");
}

#[actix_web::test]
async fn test_bulk_empty_list() {
    let (status, body) = post_json(&[], "/validate-emails-bulk", json!({ "emails": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid_count"], 0);
    assert_eq!(body["invalid_count"], 0);
}

#[actix_web::test]
async fn test_bulk_limit() {
    // One more than the allowed batch
    let emails: Vec<String> = (0..=MAX_BULK_EMAILS)
        .map(|i| format!("user{}@example.com", i))
        .collect();
    let (status, body) =
        post_json(&["example.com"], "/validate-emails-bulk", json!({ "emails": emails })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "TOO_MANY_EMAILS");
}

#[actix_web::test]
async fn test_dotless_domain_is_syntax_error() {
    let (status, body) =
        post_json(&["gmailcom"], "/validate-email", json!({ "email": "user@gmailcom" })).await;

    // Rejected before any DNS lookup
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_SYNTAX");
    assert_eq!(body["suggestion"], "user@gmail.com");
}
