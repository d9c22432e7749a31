use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub ctm_base_url: String,
    pub ctm_account_id: String,
    pub ctm_auth_string: String,
    pub ga4_base_url: String,
    pub ga4_measurement_id: String,
    pub ga4_api_secret: String,
}

impl Config {
    /// Loads configuration from the environment (and an optional `.env` file).
    ///
    /// Credentials are consumed as opaque strings and deliberately NOT
    /// validated for presence: missing values simply produce failed
    /// outbound calls, which the webhook flow already handles.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            ctm_base_url: std::env::var("CTM_BASE_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "https://api.calltrackingmetrics.com".to_string()),
            ctm_account_id: std::env::var("CTM_ACCOUNT_ID").unwrap_or_default(),
            ctm_auth_string: std::env::var("CTM_AUTH_STRING").unwrap_or_default(),
            ga4_base_url: std::env::var("GA4_BASE_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "https://www.google-analytics.com".to_string()),
            ga4_measurement_id: std::env::var("GA4_MEASUREMENT_ID").unwrap_or_default(),
            ga4_api_secret: std::env::var("GA4_API_SECRET").unwrap_or_default(),
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("CTM Base URL: {}", config.ctm_base_url);
        tracing::debug!("GA4 Base URL: {}", config.ga4_base_url);
        tracing::debug!("Server Port: {}", config.port);
        if config.ctm_auth_string.is_empty() {
            tracing::warn!("CTM_AUTH_STRING not set; CTM lookups will fail");
        }
        if config.ga4_measurement_id.is_empty() || config.ga4_api_secret.is_empty() {
            tracing::warn!("GA4 credentials not set; event forwarding will fail");
        }

        Ok(config)
    }
}
