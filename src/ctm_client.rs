use crate::config::Config;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One call entry from the CTM search API.
///
/// Only the paid-attribution block is typed; everything else CTM sends is
/// preserved in the flattened raw value.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallRecord {
    #[serde(default)]
    pub paid: Option<PaidAttribution>,

    /// Raw call data for any additional fields
    #[serde(flatten)]
    pub raw: Value,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaidAttribution {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CtmSearchResponse {
    calls: Option<Vec<CallRecord>>,
}

/// Strips every non-digit character from a phone number.
///
/// `"+1 (555) 123-4567"` becomes `"15551234567"`, matching how CTM stores
/// contact numbers.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Client for the CallTrackingMetrics call-search API.
#[derive(Clone)]
pub struct CtmClient {
    client: reqwest::Client,
    base_url: String,
    account_id: String,
    auth_string: String,
}

impl CtmClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.ctm_base_url.clone(),
            account_id: config.ctm_account_id.clone(),
            auth_string: config.ctm_auth_string.clone(),
        }
    }

    /// Searches the CTM call log for calls from the given phone number,
    /// oldest first.
    ///
    /// Returns `Some(calls)` when the response carries a `calls` list
    /// (possibly empty) and `None` when it does not. Transport failures and
    /// error responses are logged and also mapped to `None`; upstream
    /// trouble is treated identically to "no match". No retries.
    pub async fn search_calls(&self, phone_number: &str) -> Option<Vec<CallRecord>> {
        match self.search_calls_inner(phone_number).await {
            Ok(calls) => calls,
            Err(e) => {
                tracing::error!("CTM call search failed: {}", e);
                None
            }
        }
    }

    async fn search_calls_inner(
        &self,
        phone_number: &str,
    ) -> Result<Option<Vec<CallRecord>>, reqwest::Error> {
        let normalized = normalize_phone(phone_number);
        let url = format!(
            "{}/api/v1/accounts/{}/calls/search.json",
            self.base_url, self.account_id
        );
        tracing::info!("Searching CTM calls for contact number {}", normalized);

        let body = json!({
            "filter": format!("contact_number:\"{}\"", normalized),
            "sort_by": "call_started_at",
            "sort_order": "asc"
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Basic {}", self.auth_string))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let search: CtmSearchResponse = response.json().await?;
        Ok(search.calls)
    }
}
