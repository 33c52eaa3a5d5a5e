use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use email_gate::config::{ServerConfig, ValidatorConfig};
use email_gate::graphql::schema::create_schema;
use email_gate::handlers::validation::validator::EmailValidator;
use email_gate::openapi::ApiDoc;
use log::info;
use std::io;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email Gate Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - REST validation endpoints under `/api/v1`
/// - GraphQL endpoint and playground under `/api/v1`
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Configuration
/// - `BIND_ADDRESS` / `PORT`: listener, `127.0.0.1:8080` by default
/// - `RUST_LOG`: log filter, `info` by default
/// - validator lists and DNS timeout, see [`ValidatorConfig::from_env`]
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server_config =
        ServerConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let validator_config =
        ValidatorConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let validator = Arc::new(EmailValidator::new(validator_config));
    let config = validator.config();
    info!(
        "Validator configured with {} disposable domains, {} risky addresses, {} common domains, DNS timeout {:?}",
        config.disposable_domains.len(),
        config.risky_addresses.len(),
        config.common_domains.len(),
        config.dns_timeout
    );

    let schema = create_schema(Arc::clone(&validator));
    let openapi = ApiDoc::openapi();

    info!(
        "Starting server on {}:{}",
        server_config.bind_address, server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::from(Arc::clone(&validator)))
            .app_data(Data::new(schema.clone()))
            .configure(email_gate::routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((server_config.bind_address.as_str(), server_config.port))?
    .run()
    .await
}
