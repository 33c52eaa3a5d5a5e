/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
pub mod health;

/// Request and response bodies for the email validation endpoints.
pub mod email;
