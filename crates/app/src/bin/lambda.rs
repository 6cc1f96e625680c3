//! DevHeaven API - AWS Lambda Runtime

use std::sync::Arc;

use lambda_http::{run, Error};
use tower_http::trace::TraceLayer;
use tracing::info;

use devheaven_app::{body_limit_layer, build_cors_layer, create_app};
use devheaven_common::Config;
use devheaven_store::{StoreConfig, StoreServiceFactory};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config =
        Config::from_env().map_err(|e| Error::from(format!("Configuration error: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .json()
        .without_time()
        .init();

    info!("Initializing DevHeaven API Lambda");

    let store = StoreServiceFactory::create(StoreConfig::from(&config))
        .await
        .map_err(|e| Error::from(format!("Document store error: {}", e)))?;

    info!(store = store.provider_name(), "Document store ready");

    let app = create_app(&config, Arc::from(store))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config.allowed_origins))
        .layer(body_limit_layer());

    info!("DevHeaven API Lambda ready to serve requests");

    run(app).await
}
