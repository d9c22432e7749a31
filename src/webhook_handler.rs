use crate::attribution;
use crate::errors::AppError;
use crate::handlers::AppState;
use crate::webhook_models::{WebhookPayload, WebhookResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Sale webhook handler.
///
/// Flow:
/// 1. Validate the payload carries a phone number.
/// 2. Look the number up in the CTM call log (oldest call first).
/// 3. Extract attribution from the first call with paid data.
/// 4. Forward a phone_purchase event to GA4.
///
/// A phone number with no matching calls is a silent skip: respond 204 and
/// never contact GA4. CTM being unreachable takes the same path. A GA4
/// failure surfaces as 500 with the error text.
pub async fn sale_webhook(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<WebhookPayload>,
) -> Result<Response, AppError> {
    tracing::info!(
        "Received sale webhook: transaction_id={}, amount={}",
        payload.transaction_id,
        payload.total_amount_excluding_tax
    );

    // Step 1: Validate phone number presence
    let phone_number = payload
        .phone_number
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or(AppError::NoPhoneNumber)?;

    // Step 2: CTM call lookup (recovers upstream failures as "no match")
    let calls = match state.ctm.search_calls(phone_number).await {
        Some(calls) if !calls.is_empty() => calls,
        Some(_) => {
            tracing::info!("CTM returned no calls for this number; skipping GA4");
            return Ok(StatusCode::NO_CONTENT.into_response());
        }
        None => {
            tracing::info!("No CTM match for this number; skipping GA4");
            return Ok(StatusCode::NO_CONTENT.into_response());
        }
    };
    tracing::info!("CTM lookup returned {} call(s)", calls.len());

    // Step 3: Attribution from the first paid call
    let attribution = attribution::resolve(&calls);
    tracing::debug!(
        "Resolved attribution: source={:?}, medium={:?}, campaign={:?}",
        attribution.source,
        attribution.medium,
        attribution.campaign
    );

    // Step 4: Forward the purchase event (failures propagate as 500)
    let ga4_status = state
        .ga4
        .send_purchase_event(
            &payload.transaction_id,
            payload.total_amount_excluding_tax,
            &attribution,
        )
        .await?;
    tracing::info!("GA4 accepted phone_purchase event with status {}", ga4_status);

    Ok((
        StatusCode::OK,
        Json(WebhookResponse {
            message: "Data successfully sent to GA4".to_string(),
            ga4_status,
        }),
    )
        .into_response())
}
