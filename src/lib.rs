//! CTM to GA4 Sale-Attribution Bridge Library
//!
//! This library provides the core functionality for the webhook bridge
//! between CallTrackingMetrics (call search and attribution metadata) and
//! GA4 (purchase event ingestion via the Measurement Protocol).
//!
//! # Modules
//!
//! - `attribution`: First-match attribution extraction over call records.
//! - `config`: Configuration management.
//! - `ctm_client`: CTM call-search client and phone normalization.
//! - `errors`: Error handling types.
//! - `ga4_client`: GA4 Measurement Protocol client.
//! - `handlers`: HTTP request handlers and shared state.
//! - `webhook_handler`: Sale webhook handler.
//! - `webhook_models`: Webhook payload models.

pub mod attribution;
pub mod config;
pub mod ctm_client;
pub mod errors;
pub mod ga4_client;
pub mod handlers;
pub mod webhook_handler;
pub mod webhook_models;
