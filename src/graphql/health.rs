use crate::models::health::HealthResponse;
use async_graphql::{Object, SimpleObject};

/// GraphQL representation of service health status, mirroring the REST
/// health response.
#[derive(SimpleObject, Debug)]
pub struct Health {
    /// "UP" while the service answers requests
    pub status: String,
    /// Crate version of the running binary
    pub version: String,
    /// RFC 3339 time of the check
    pub timestamp: String,
}

impl From<HealthResponse> for Health {
    fn from(response: HealthResponse) -> Self {
        Self {
            status: response.status,
            version: response.version,
            timestamp: response.timestamp,
        }
    }
}

/// Root query type for health-related GraphQL operations
#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Checks service health status
    async fn health(&self) -> Health {
        Health::from(HealthResponse::up())
    }
}
