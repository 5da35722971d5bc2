//! Webhook endpoint handlers.
//!
//! The unassign endpoint is a stateless transform: it validates the
//! subscription handshake, extracts ids from the inbound event, decides
//! assign vs. unassign from the column value, and issues a single outbound
//! mutation. Nothing is stored between requests.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::column::{id_as_string, is_empty, normalize_value, person_column_value};
use crate::monday::MondayClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub monday: MondayClient,
}

impl AppState {
    pub fn new(monday: MondayClient) -> Self {
        Self { monday }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Unassign Webhook
// =============================================================================

/// Inbound webhook payload.
///
/// Every field is optional: the subscription handshake carries only
/// `challenge`, and live events carry `event` plus an optional
/// `assign_column` when it is not passed as a query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub challenge: Option<Value>,
    #[serde(default)]
    pub assign_column: Option<String>,
    #[serde(default)]
    pub event: Option<WebhookEvent>,
}

/// Column-change event fields as monday delivers them.
///
/// Ids arrive as numbers but strings are tolerated. `value` may itself be a
/// JSON-encoded string for some column types.
#[derive(Debug, Default, Deserialize)]
pub struct WebhookEvent {
    #[serde(default, rename = "userId")]
    pub user_id: Value,
    #[serde(default, rename = "pulseId")]
    pub pulse_id: Value,
    #[serde(default, rename = "boardId")]
    pub board_id: Value,
    #[serde(default)]
    pub value: Value,
}

/// Query parameters for the unassign endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UnassignQuery {
    #[serde(default)]
    pub assign_column: Option<String>,
}

/// Unassign webhook endpoint.
///
/// Responds to the platform's challenge handshake, then for live events
/// assigns the acting user to the configured person column when the watched
/// column has a value, or clears it when the value is empty.
pub async fn unassign_webhook(
    State(state): State<AppState>,
    Query(query): Query<UnassignQuery>,
    Json(payload): Json<WebhookPayload>,
) -> impl IntoResponse {
    // Subscription handshake: echo the challenge back before anything else.
    if let Some(challenge) = payload.challenge {
        info!("unassign_challenge_received");
        return (StatusCode::OK, Json(json!({ "challenge": challenge })));
    }

    // The assign column can come via query (?assign_column=col_x)
    // or body {"assign_column": "col_x"}.
    let assign_column_id = match query
        .assign_column
        .filter(|c| !c.is_empty())
        .or(payload.assign_column)
    {
        Some(id) if !id.is_empty() => id,
        _ => {
            warn!("unassign_missing_assign_column");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing assign_column" })),
            );
        }
    };

    let event = payload.event.unwrap_or_default();

    // Events without full context (e.g. board-level notifications) are a
    // normal no-op, not an error.
    let ids = (
        id_as_string(&event.user_id),
        id_as_string(&event.pulse_id),
        id_as_string(&event.board_id),
    );
    let (user_id, item_id, board_id) = match ids {
        (Some(user), Some(item), Some(board)) => (user, item, board),
        _ => {
            info!(
                has_user_id = !event.user_id.is_null(),
                has_pulse_id = !event.pulse_id.is_null(),
                has_board_id = !event.board_id.is_null(),
                "unassign_missing_ids"
            );
            return (
                StatusCode::OK,
                Json(json!({ "status": "ignored", "reason": "missing ids" })),
            );
        }
    };

    // monday may send 'value' as a JSON string; decode it before classifying.
    let value = normalize_value(event.value);
    let empty = is_empty(&value);
    let column_value = person_column_value(&event.user_id, empty);

    info!(
        board_id = %board_id,
        item_id = %item_id,
        user_id = %user_id,
        column_id = %assign_column_id,
        unassign = empty,
        "unassign_event_received"
    );

    match state
        .monday
        .change_column_value(&board_id, &item_id, &assign_column_id, &column_value)
        .await
    {
        Ok(result) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "result": result })),
        ),
        Err(e) => {
            error!(error = %e, board_id = %board_id, item_id = %item_id, "unassign_mutation_failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "message": e.to_string() })),
            )
        }
    }
}
