use crate::handlers::validation::validator::{EmailValidator, Verdict};
use crate::models::email::{
    BulkEmailRequest, BulkEmailValidationResponse, BulkEmailValidationResult, EmailRequest,
    VerdictResponse,
};
use actix_web::{HttpResponse, Responder, post, web};
use futures::future::join_all;
use log::error;
use serde_json::json;
use std::sync::Arc;

/// Upper bound on addresses accepted by one bulk request.
pub const MAX_BULK_EMAILS: usize = 100;

/// Runs the blocking validation chain on actix's blocking thread pool.
pub async fn run_validation(
    validator: Arc<EmailValidator>,
    email: String,
) -> Result<Verdict, actix_web::error::BlockingError> {
    web::block(move || validator.validate(&email)).await
}

fn internal_error(message: String) -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({
        "error": "INTERNAL_ERROR",
        "message": message
    }))
}

/// # Email Validation Endpoint
///
/// Runs the validation chain for one address:
/// 1. Required / syntax check
/// 2. Domain DNS/MX record verification
/// 3. Disposable domain check
/// 4. Risky address check
///
/// ## Responses
/// - **200 OK**: Email is valid
/// - **400 Bad Request**: Email was rejected; body carries `code`, `reason`
///   and, for typos, a `suggestion`
/// - **500 Internal Server Error**: Validation task could not run
///
/// ## Example Request
/// ```json
/// { "email": "user@gmial.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-email",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Email is valid", body = VerdictResponse),
        (status = 400, description = "Email was rejected", body = VerdictResponse),
        (status = 500, description = "Server error")
    ),
    tag = "Email Validation"
)]
#[post("/validate-email")]
pub async fn validate_email(
    req: web::Json<EmailRequest>,
    validator: web::Data<EmailValidator>,
) -> impl Responder {
    let email = req.into_inner().email;

    match run_validation(validator.into_inner(), email).await {
        Ok(verdict) => {
            let body = VerdictResponse::from(&verdict);
            if verdict.is_valid() {
                HttpResponse::Ok().json(body)
            } else {
                HttpResponse::BadRequest().json(body)
            }
        }
        Err(e) => {
            error!("Email validation task failed: {}", e);
            internal_error(format!("Validation task failed: {}", e))
        }
    }
}

/// # Bulk Email Validation Endpoint
///
/// Validates up to [`MAX_BULK_EMAILS`] addresses concurrently. Every entry
/// gets its own verdict; the response also carries valid/invalid counts.
///
/// ## Responses
/// - **200 OK**: Returns validation results for all emails with counts
/// - **400 Bad Request**: Too many addresses in one request
///
/// ## Example Request
/// ```json
/// { "emails": ["user1@example.com", "user2@gmial.com"] }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-emails-bulk",
    request_body = BulkEmailRequest,
    responses(
        (status = 200, description = "Bulk validation results", body = BulkEmailValidationResponse),
        (status = 400, description = "Too many addresses"),
        (status = 500, description = "Server error")
    ),
    tag = "Email Validation"
)]
#[post("/validate-emails-bulk")]
pub async fn validate_emails_bulk(
    req: web::Json<BulkEmailRequest>,
    validator: web::Data<EmailValidator>,
) -> impl Responder {
    let emails = req.into_inner().emails;

    if emails.len() > MAX_BULK_EMAILS {
        return HttpResponse::BadRequest().json(json!({
            "error": "TOO_MANY_EMAILS",
            "message": format!("At most {} addresses can be validated per request", MAX_BULK_EMAILS)
        }));
    }

    let validator = validator.into_inner();
    let validation_futures = emails.into_iter().map(|email| {
        let validator = Arc::clone(&validator);
        async move {
            let verdict = run_validation(validator, email.clone()).await?;
            Ok::<_, actix_web::error::BlockingError>(BulkEmailValidationResult {
                email,
                validation: VerdictResponse::from(&verdict),
            })
        }
    });

    let results: Result<Vec<_>, _> = join_all(validation_futures).await.into_iter().collect();

    match results {
        Ok(results) => HttpResponse::Ok().json(BulkEmailValidationResponse::from_results(results)),
        Err(e) => {
            error!("Bulk email validation task failed: {}", e);
            internal_error(format!("Validation task failed: {}", e))
        }
    }
}

/// Configures email validation routes under /api/v1
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_email).service(validate_emails_bulk);
}

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;
