use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
pub mod health;

/// # Email Validation Endpoints
///
/// Single and bulk validation of email addresses. Each address runs through
/// the required, syntax, DNS, disposable and risky-address checks in order.
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com" }
/// ```
pub mod email;

/// # GraphQL Endpoint and Playground
pub mod graphql;

/// # API Route Configuration
///
/// Sets up versioned API endpoints under the `/api/v1` base path.
///
/// ## Example Endpoints
///
/// ```text
/// GET  /api/v1/health               - Service health status
/// POST /api/v1/validate-email       - Single email validation
/// POST /api/v1/validate-emails-bulk - Bulk email validation
/// POST /api/v1/graphql              - GraphQL queries
/// GET  /api/v1/playground           - GraphQL playground
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(email::configure_routes)
            .configure(graphql::configure_routes),
    );
}
