use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Liveness payload for the health endpoints.
///
/// ## Fields
/// - `status`: "UP" while the service answers requests
/// - `version`: crate version of the running binary
/// - `timestamp`: RFC 3339 time of the check
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
