//! monday.com GraphQL API client.
//!
//! A thin client for the monday.com v2 API. The bearer token and endpoint
//! are injected from `Config` at construction so no business logic reads the
//! process environment.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{error, info};

use crate::config::Config;

/// GraphQL mutation for updating a single column value on an item.
const CHANGE_COLUMN_VALUE: &str = r#"
  mutation ($boardId: ID!, $itemId: ID!, $columnId: String!, $value: JSON!) {
    change_column_value(board_id:$boardId, item_id:$itemId, column_id:$columnId, value:$value){ id }
  }
"#;

/// Errors surfaced by the monday.com client.
///
/// The handler forwards the `Display` text of these unchanged into its
/// 500 response body.
#[derive(Debug, Error)]
pub enum MondayError {
    #[error("API_TOKEN is missing. Set env var API_TOKEN.")]
    MissingToken,

    #[error("monday.com returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("monday.com request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Shareable monday.com API client.
///
/// Cloning is cheap; the underlying reqwest client pools connections.
#[derive(Clone)]
pub struct MondayClient {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl MondayClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_url: config.monday_api_url.clone(),
            token: config.api_token.clone(),
        }
    }

    fn token(&self) -> Result<&str, MondayError> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(MondayError::MissingToken),
        }
    }

    /// Run a GraphQL query against the monday.com API.
    ///
    /// Fails before any network I/O when the token is not configured.
    /// Non-2xx responses carry the response text; success returns the parsed
    /// JSON body as-is.
    pub async fn run_query(&self, query: &str, variables: Value) -> Result<Value, MondayError> {
        let token = self.token()?;

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "monday_request_failed");
            return Err(MondayError::Status { status, body });
        }

        Ok(response.json::<Value>().await?)
    }

    /// Update a single column value on an item.
    ///
    /// The API expects the `value` variable as a serialized JSON scalar, so
    /// the column value is JSON-encoded into a string here.
    pub async fn change_column_value(
        &self,
        board_id: &str,
        item_id: &str,
        column_id: &str,
        value: &Value,
    ) -> Result<Value, MondayError> {
        let variables = json!({
            "boardId": board_id,
            "itemId": item_id,
            "columnId": column_id,
            "value": value.to_string(),
        });

        info!(
            board_id = %board_id,
            item_id = %item_id,
            column_id = %column_id,
            "monday_change_column_value"
        );

        self.run_query(CHANGE_COLUMN_VALUE, variables).await
    }
}
