//! Configuration module for environment variable parsing.
//!
//! Reads all configuration from environment variables with safe defaults.

use std::env;

/// Default monday.com GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://api.monday.com/v2";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// monday.com API token for outbound mutations.
    ///
    /// Unset and blank are both treated as "not configured"; the missing
    /// token surfaces on the first real event, not at startup.
    pub api_token: Option<String>,

    /// monday.com GraphQL endpoint (overridable for tests and staging)
    pub monday_api_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),

            api_token: non_blank(env::var("API_TOKEN").ok()),

            monday_api_url: non_blank(env::var("MONDAY_API_URL").ok())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }
}

/// Collapse unset and whitespace-only values into `None`.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
