use actix_web::{HttpResponse, Responder, web};
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::graphql::schema::AppSchema;

/// Handles incoming GraphQL requests against the shared schema.
pub async fn graphql_handler(schema: web::Data<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Serves the GraphQL Playground pointed at `/api/v1/graphql`.
///
/// # Note
/// This endpoint is meant for development use.
pub async fn graphql_playground() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new(
            "/api/v1/graphql",
        )))
}
