//! Assigner - monday.com person-column webhook bridge.
//!
//! A stateless service that listens for monday.com column-change webhooks
//! and keeps a person column in sync with a watched column: when the watched
//! value is cleared the person column is unassigned, otherwise the user who
//! made the change is assigned.
//!
//! ## Architecture
//!
//! ```text
//! monday.com webhook → Web Server → change_column_value mutation → monday.com
//! ```

pub mod column;
pub mod config;
pub mod monday;
pub mod web;

// Re-export commonly used types
pub use column::{id_as_string, is_empty, normalize_value, person_column_value};
pub use config::Config;
pub use monday::{MondayClient, MondayError};
pub use web::AppState;
