//! Relay error responses.
//!
//! # Responsibilities
//! - Define errors a relay call can end with
//! - Map them to HTTP status codes and a JSON error body
//!
//! # Design Decisions
//! - Header override errors are channel configuration errors (500), not
//!   upstream faults, and are never retried

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::header_override::HeaderOverrideError;

/// Errors that end a relay call before an upstream response is available.
#[derive(Debug, Error)]
pub enum RelayError {
    /// No channel is configured for the request path.
    #[error("no channel configured for path {path}")]
    NoChannel { path: String },

    /// The channel's header override block is invalid.
    #[error("channel '{channel}': {source}")]
    HeaderOverride {
        channel: String,
        source: HeaderOverrideError,
    },

    /// The upstream URL could not be built.
    #[error("invalid upstream url '{url}': {reason}")]
    InvalidUpstreamUrl { url: String, reason: String },

    /// The inbound request body exceeds the configured limit.
    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// The inbound request body could not be read.
    #[error("failed to read request body: {0}")]
    Body(String),

    /// The upstream request failed.
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoChannel { .. } => StatusCode::NOT_FOUND,
            Self::HeaderOverride { .. } | Self::InvalidUpstreamUrl { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Stable error code for the JSON body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoChannel { .. } => "route:no_channel",
            Self::HeaderOverride { source, .. } => source.code(),
            Self::InvalidUpstreamUrl { .. } => "channel:invalid_base_url",
            Self::PayloadTooLarge { .. } => "request:body_too_large",
            Self::Body(_) => "request:invalid_body",
            Self::Upstream(_) => "upstream:request_failed",
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}
