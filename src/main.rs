use actix_web::{web, App, HttpServer};
use anyhow::Context;
use chapa_checkout::config::Config;
use chapa_checkout::middleware::{cors_headers, RequestId};
use chapa_checkout::payments::{CheckoutService, CHECKOUT_PATH};
use chapa_checkout::{modules, telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    telemetry::init_tracing(&config.app);

    tracing::info!("Starting Chapa checkout service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Gateway: {}", config.chapa.base_url);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    if !config.chapa.is_configured() {
        tracing::warn!(
            "CHAPA_SECRET_KEY is not set; {} will answer 500 until it is configured",
            CHECKOUT_PATH
        );
    }

    let service = web::Data::new(CheckoutService::from_config(&config.chapa));

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors_headers())
            .wrap(RequestId)
            .app_data(service.clone())
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
