use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound sale notification from the e-commerce side.
///
/// Only `phoneNumber` is validated by the handler; the other fields are
/// defaulted when absent and passed through to GA4 as-is.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    /// Phone number of the buyer, in whatever format the caller sends it.
    pub phone_number: Option<String>,

    /// Transaction identifier forwarded to GA4 verbatim.
    #[serde(default)]
    pub transaction_id: String,

    /// Revenue amount (pre-tax), forwarded to GA4 as the event value.
    #[serde(default)]
    pub total_amount_excluding_tax: f64,

    /// Raw data for any additional fields
    #[serde(flatten)]
    pub raw: Value,
}

/// Response body for the success path.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub message: String,
    pub ga4_status: u16,
}
