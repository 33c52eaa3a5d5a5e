use crate::handlers::validation::validator::{EmailValidator, Verdict};
use crate::models::email::{
    BulkEmailValidationResponse, BulkEmailValidationResult, VerdictResponse,
};
use crate::routes::email::MAX_BULK_EMAILS;
use async_graphql::{Context, Error, Object, Result};
use futures::future::try_join_all;
use std::sync::Arc;

/// Email validation query operations.
///
/// The shared [`EmailValidator`] is read from the schema data, see
/// [`create_schema`](crate::graphql::schema::create_schema).
#[derive(Default)]
pub struct EmailQuery;

#[Object]
impl EmailQuery {
    /// Validates one email address.
    ///
    /// Rejections come back as data (`isValid: false` with `code`, `reason`
    /// and an optional `suggestion`), not as GraphQL errors.
    async fn validate_email(&self, ctx: &Context<'_>, email: String) -> Result<VerdictResponse> {
        let validator = ctx.data::<Arc<EmailValidator>>()?;
        let verdict = validate_blocking(Arc::clone(validator), email).await?;
        Ok(VerdictResponse::from(&verdict))
    }

    /// Validates several email addresses concurrently.
    async fn validate_emails_bulk(
        &self,
        ctx: &Context<'_>,
        emails: Vec<String>,
    ) -> Result<BulkEmailValidationResponse> {
        if emails.len() > MAX_BULK_EMAILS {
            return Err(Error::new(format!(
                "At most {} addresses can be validated per request",
                MAX_BULK_EMAILS
            )));
        }

        let validator = ctx.data::<Arc<EmailValidator>>()?;
        let validation_futures = emails.into_iter().map(|email| {
            let validator = Arc::clone(validator);
            async move {
                let verdict = validate_blocking(validator, email.clone()).await?;
                Ok::<_, Error>(BulkEmailValidationResult {
                    email,
                    validation: VerdictResponse::from(&verdict),
                })
            }
        });

        let results = try_join_all(validation_futures).await?;
        Ok(BulkEmailValidationResponse::from_results(results))
    }
}

/// Runs the blocking validation chain off the async executor.
async fn validate_blocking(validator: Arc<EmailValidator>, email: String) -> Result<Verdict> {
    tokio::task::spawn_blocking(move || validator.validate(&email))
        .await
        .map_err(|e| Error::new(format!("Task join error: {}", e)))
}

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;
