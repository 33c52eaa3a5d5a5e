use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// REST handlers and served by Swagger UI.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Email Validation: `POST /api/v1/validate-email`
/// - Bulk Email Validation: `POST /api/v1/validate-emails-bulk`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate_email,
        crate::routes::email::validate_emails_bulk,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::email::EmailRequest,
            crate::models::email::BulkEmailRequest,
            crate::models::email::VerdictResponse,
            crate::models::email::BulkEmailValidationResult,
            crate::models::email::BulkEmailValidationResponse
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Email address validation endpoints"),
        (name = "GraphQL", description = "GraphQL API exposing the same validation queries")
    ),
    info(
        description = "Checkout and registration email validation with typo suggestions",
        title = "Email Gate API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
