use crate::attribution::Attribution;
use crate::config::Config;
use crate::errors::AppError;
use chrono::Utc;
use serde_json::json;

/// Client for the GA4 Measurement Protocol collection endpoint.
#[derive(Clone)]
pub struct Ga4Client {
    client: reqwest::Client,
    base_url: String,
    measurement_id: String,
    api_secret: String,
}

impl Ga4Client {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.ga4_base_url.clone(),
            measurement_id: config.ga4_measurement_id.clone(),
            api_secret: config.ga4_api_secret.clone(),
        }
    }

    /// Forwards one `phone_purchase` event to GA4.
    ///
    /// Attribution fields fall back to the literal `"unknown"` when absent.
    /// Each event gets a fresh timestamp-derived client id; there is no
    /// stable per-user identity. Returns the upstream status code on
    /// success; transport failures and error responses propagate as `Err`.
    pub async fn send_purchase_event(
        &self,
        transaction_id: &str,
        revenue: f64,
        attribution: &Attribution,
    ) -> Result<u16, AppError> {
        // Build URL with proper parameter encoding to prevent injection attacks
        let url = reqwest::Url::parse_with_params(
            &format!("{}/mp/collect", self.base_url),
            &[
                ("measurement_id", self.measurement_id.as_str()),
                ("api_secret", self.api_secret.as_str()),
            ],
        )
        .map_err(|e| AppError::ExternalApiError(format!("Failed to build GA4 URL: {}", e)))?;

        let body = json!({
            "client_id": generate_client_id(),
            "events": [{
                "name": "phone_purchase",
                "params": {
                    "transaction_id": transaction_id,
                    "value": revenue,
                    "currency": "USD",
                    "source": attribution.source.as_deref().unwrap_or("unknown"),
                    "medium": attribution.medium.as_deref().unwrap_or("unknown"),
                    "campaign": attribution.campaign.as_deref().unwrap_or("unknown"),
                }
            }]
        });

        tracing::info!("Sending phone_purchase event to GA4: {}", transaction_id);
        // Redact api_secret from logs to prevent credential exposure
        tracing::debug!(
            "GA4 URL: {}/mp/collect?measurement_id={}&api_secret=[REDACTED]",
            self.base_url,
            self.measurement_id
        );

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("GA4 request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "GA4 returned {}: {}",
                status, error_text
            )));
        }

        Ok(status.as_u16())
    }
}

/// Pseudo client identifier: fixed prefix plus the current time in
/// milliseconds. Fresh per event, not globally unique, not random.
fn generate_client_id() -> String {
    format!("ctm.{}", Utc::now().timestamp_millis())
}
