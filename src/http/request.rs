//! Request handling and transformation.
//!
//! # Responsibilities
//! - Read the request ID assigned by the request-id layer
//! - Prepare inbound headers for forwarding to the upstream
//! - Build the upstream URL
//!
//! # Design Decisions
//! - Hop-by-hop headers never cross the relay
//! - `Host` and `Content-Length` are recomputed by the upstream client

use axum::http::{header, HeaderMap, HeaderName, Uri};
use url::Url;

use crate::http::response::RelayError;

/// Correlation header assigned to every relayed request.
pub const X_REQUEST_ID: &str = "x-request-id";

const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Request ID of an inbound request, or a fresh UUID if none is present.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Remove hop-by-hop headers, including any listed in `Connection`.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let listed: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    for name in listed {
        headers.remove(name.as_str());
    }
    for name in &HOP_BY_HOP {
        headers.remove(name);
    }
}

/// Copy of the inbound headers suitable for the upstream request.
pub fn outbound_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut headers = inbound.clone();
    strip_hop_by_hop(&mut headers);
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);
    headers
}

/// Join the channel base URL with the upstream path and query.
pub fn upstream_url(base_url: &str, path: &str, query: Option<&str>) -> Result<Uri, RelayError> {
    let mut target = format!("{}{}", base_url.trim_end_matches('/'), path);
    if let Some(query) = query {
        target.push('?');
        target.push_str(query);
    }
    let invalid = |reason: String| RelayError::InvalidUpstreamUrl {
        url: target.clone(),
        reason,
    };
    let url = Url::parse(&target).map_err(|e| invalid(e.to_string()))?;
    Uri::try_from(url.as_str()).map_err(|e| invalid(e.to_string()))
}
