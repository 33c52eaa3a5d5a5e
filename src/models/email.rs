use crate::handlers::validation::validator::Verdict;
use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct BulkEmailRequest {
    pub emails: Vec<String>,
}

/// Verdict for one address as exposed over REST and GraphQL.
///
/// `code` and `reason` are null when the address is valid. `suggestion` is
/// only present for syntax and unreachable-domain failures.
#[derive(Serialize, Deserialize, ToSchema, SimpleObject, Debug, Clone, PartialEq)]
pub struct VerdictResponse {
    pub is_valid: bool,
    pub code: Option<String>,
    pub reason: Option<String>,
    pub suggestion: Option<String>,
}

impl From<&Verdict> for VerdictResponse {
    fn from(verdict: &Verdict) -> Self {
        Self {
            is_valid: verdict.is_valid(),
            code: verdict.rejection().map(|r| r.code().to_string()),
            reason: verdict.reason().map(str::to_string),
            suggestion: verdict.suggestion().map(str::to_string),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, SimpleObject, Debug)]
pub struct BulkEmailValidationResult {
    pub email: String,
    pub validation: VerdictResponse,
}

#[derive(Serialize, Deserialize, ToSchema, SimpleObject, Debug)]
pub struct BulkEmailValidationResponse {
    pub results: Vec<BulkEmailValidationResult>,
    pub valid_count: i32,
    pub invalid_count: i32,
}

impl BulkEmailValidationResponse {
    /// Builds the response and tallies valid and invalid entries.
    pub fn from_results(results: Vec<BulkEmailValidationResult>) -> Self {
        let valid_count = results.iter().filter(|r| r.validation.is_valid).count() as i32;
        let invalid_count = results.len() as i32 - valid_count;
        Self {
            results,
            valid_count,
            invalid_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{self, json};

    #[test]
    fn test_valid_email_deserialization() {
        let json = r#"{"email": "user@example.com"}"#;
        let email_request: EmailRequest = serde_json::from_str(json).unwrap();
        assert_eq!(email_request.email, "user@example.com");
    }

    #[test]
    fn test_missing_email_field() {
        let result: Result<EmailRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_email_type() {
        let result: Result<EmailRequest, _> = serde_json::from_str(r#"{"email": 123}"#);
        assert!(result.is_err());
        let result: Result<EmailRequest, _> = serde_json::from_str(r#"{"email": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_email_with_whitespace_is_kept_raw() {
        let json = r#"{"email": "  user@example.com  "}"#;
        let email_request: EmailRequest = serde_json::from_str(json).unwrap();
        assert_eq!(email_request.email, "  user@example.com  ");
    }

    #[test]
    fn test_bulk_request_deserialization() {
        let json = r#"{"emails": ["a@example.com", "b@example.com"]}"#;
        let request: BulkEmailRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.emails.len(), 2);
    }

    #[test]
    fn test_verdict_response_serialization() {
        let response = VerdictResponse {
            is_valid: false,
            code: Some("INVALID_DOMAIN".to_string()),
            reason: Some("The email domain cannot receive messages.".to_string()),
            suggestion: Some("user@gmail.com".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "is_valid": false,
                "code": "INVALID_DOMAIN",
                "reason": "The email domain cannot receive messages.",
                "suggestion": "user@gmail.com"
            })
        );
    }

    #[test]
    fn test_bulk_response_counts() {
        let entry = |email: &str, is_valid: bool| BulkEmailValidationResult {
            email: email.to_string(),
            validation: VerdictResponse {
                is_valid,
                code: None,
                reason: None,
                suggestion: None,
            },
        };
        let response = BulkEmailValidationResponse::from_results(vec![
            entry("a@example.com", true),
            entry("b@example.com", false),
            entry("c@example.com", false),
        ]);
        assert_eq!(response.valid_count, 1);
        assert_eq!(response.invalid_count, 2);
        assert_eq!(response.results.len(), 3);
    }
}
