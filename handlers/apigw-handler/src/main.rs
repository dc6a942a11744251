//! API gateway media ingest function - Main entry point
//!
//! Resolves configuration once, builds the DynamoDB client, and hands every
//! invocation to [`handler::MediaHandler`].

mod config;
mod handler;

use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use media_ingest_sdk::{ApiGatewayProxyRequest, DynamoStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::handler::{function_handler, MediaHandler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing. The log sink stamps each line, so no timestamps.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_ansi(false)
            .with_target(false)
            .without_time())
        .init();

    // Load configuration
    let config = Arc::new(AppConfig::from_env()?);
    tracing::info!(table_name = %config.table_name, "Configuration loaded");

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoStore::new(aws_sdk_dynamodb::Client::new(&aws_config));
    let handler = MediaHandler::new(config, store);
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<ApiGatewayProxyRequest>| async move {
        function_handler(handler, event).await
    }))
    .await
}
