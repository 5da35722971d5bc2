//! Web server module for the webhook endpoints.
//!
//! A thin server with two routes:
//! - `GET /health` for liveness probes
//! - `POST /unassign` for monday.com column-change events
//!
//! Handlers transform each event into at most one outbound mutation and
//! respond immediately; nothing is queued or retried.

pub mod handlers;

pub use handlers::{
    health, unassign_webhook, AppState, HealthResponse, UnassignQuery, WebhookEvent,
    WebhookPayload,
};
