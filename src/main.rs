mod attribution;
mod config;
mod ctm_client;
mod errors;
mod ga4_client;
mod handlers;
mod webhook_handler;
mod webhook_models;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Main entry point for the application.
///
/// Initializes tracing, loads configuration, constructs the CTM and GA4
/// clients, and serves the webhook route behind size-limit and rate-limit
/// middleware. The health route bypasses rate limiting for the deploy
/// platform's checks.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ctm_ga4_bridge=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // External API clients, constructed once and shared across requests
    let ctm = ctm_client::CtmClient::new(&config);
    let ga4 = ga4_client::Ga4Client::new(&config);
    tracing::info!("CTM and GA4 clients initialized");

    // Build application state
    let app_state = Arc::new(handlers::AppState { config: config.clone(), ctm, ga4 });

    // Configure rate limiter: 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    // Build protected routes with security layers
    let protected_routes = Router::new()
        .route("/api/v1/webhooks/sale", post(webhook_handler::sale_webhook))
        .layer(
            ServiceBuilder::new()
                // Request size limit: 1MB max payload (prevents memory exhaustion)
                .layer(RequestBodyLimitLayer::new(1024 * 1024))
                // Rate limiting: 10 req/sec per IP, burst of 20
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        );

    // Build final app with health check (bypasses rate limiting)
    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(protected_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
