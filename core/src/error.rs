//! Error types for the Ticketmatic API client.
//!
//! # Design
//! Every non-2xx response lands in a single `Client` variant carrying the raw
//! status and body; this layer does not interpret individual status codes.
//! `Decode` names the model and, when it can be isolated, the JSON key that
//! failed to convert.

use thiserror::Error;

/// Errors returned by model conversion, endpoint parse functions and
/// request executors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// JSON could not be converted into the named model.
    #[error("{}", decode_message(.model, .field, .message))]
    Decode {
        model: &'static str,
        field: Option<String>,
        message: String,
    },

    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Client { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The executor could not complete the HTTP round-trip.
    #[error("transport failed: {0}")]
    Transport(String),

    /// Client configuration is missing or invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    pub(crate) fn decode(model: &'static str, message: impl Into<String>) -> Self {
        ApiError::Decode {
            model,
            field: None,
            message: message.into(),
        }
    }

    /// `true` when the server answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Client { status: 404, .. })
    }
}

fn decode_message(model: &str, field: &Option<String>, message: &str) -> String {
    match field {
        Some(field) => format!("cannot decode {model}.{field}: {message}"),
        None => format!("cannot decode {model}: {message}"),
    }
}
