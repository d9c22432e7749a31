use crate::config::Config;
use crate::ctm_client::CtmClient;
use crate::ga4_client::Ga4Client;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the CTM call-search API.
    pub ctm: CtmClient,
    /// Client for the GA4 collection endpoint.
    pub ga4: Ga4Client,
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "ctm-ga4-bridge",
            "version": "0.1.0"
        })),
    )
}
