//! Error types for Supabase store setup and requests.

use client_store_core::TransportError;
use thiserror::Error;

/// Errors that can occur while configuring the Supabase store.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Maps a `reqwest` failure onto the store's transport taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_decode() {
        TransportError::Decode(err.to_string())
    } else if let Some(status) = err.status() {
        TransportError::Status {
            status: status.as_u16(),
            body: err.to_string(),
        }
    } else {
        TransportError::Network(err.to_string())
    }
}
