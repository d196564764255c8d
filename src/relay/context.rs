//! Per-request relay context.
//!
//! The relay pipeline builds one of these for every call; the header
//! override builder only reads from it.

/// Values a relay call exposes to header override substitution.
pub trait RequestContext {
    /// API key the request is relayed with.
    fn api_key(&self) -> &str;
}

/// Metadata for a single relay call.
#[derive(Debug, Clone)]
pub struct RelayInfo {
    /// Correlation ID propagated as `x-request-id`.
    pub request_id: String,
    /// Name of the channel the request was routed to.
    pub channel: String,
    /// Upstream API key for the channel.
    pub api_key: String,
}

impl RelayInfo {
    pub fn new(
        request_id: impl Into<String>,
        channel: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            channel: channel.into(),
            api_key: api_key.into(),
        }
    }
}

impl RequestContext for RelayInfo {
    fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl RequestContext for str {
    fn api_key(&self) -> &str {
        self
    }
}
