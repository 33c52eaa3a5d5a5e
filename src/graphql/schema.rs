use super::email::EmailQuery;
use super::health::HealthQuery;
use crate::handlers::validation::validator::EmailValidator;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};
use std::sync::Arc;

/// Root query type merging the health and email validation queries.
#[derive(MergedObject, Default)]
pub struct QueryRoot(HealthQuery, EmailQuery);

/// Main GraphQL Schema Definition
///
/// Mutations and subscriptions are not used; every operation is a query.
pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Creates the GraphQL schema with the shared validator attached as data.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use email_gate::config::ValidatorConfig;
/// use email_gate::graphql::schema::create_schema;
/// use email_gate::handlers::validation::validator::EmailValidator;
///
/// let validator = Arc::new(EmailValidator::new(ValidatorConfig::default()));
/// let schema = create_schema(validator);
/// ```
pub fn create_schema(validator: Arc<EmailValidator>) -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(validator)
        .finish()
}
