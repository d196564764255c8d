//! Header override error definitions.

use thiserror::Error;

/// Stable error code reported to clients and logs.
pub const CHANNEL_HEADER_OVERRIDE_INVALID: &str = "channel:header_override_invalid";

/// Errors raised while turning a raw channel config into a spec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HeaderOverrideError {
    /// The raw header override block does not match any accepted shape.
    #[error("invalid header override in {section}: {reason}")]
    ChannelHeaderOverrideInvalid {
        /// Which part of the config was rejected (`override`, `fill`, `remove`, or `root`).
        section: &'static str,
        reason: String,
    },
}

impl HeaderOverrideError {
    pub(crate) fn invalid(section: &'static str, reason: impl Into<String>) -> Self {
        Self::ChannelHeaderOverrideInvalid {
            section,
            reason: reason.into(),
        }
    }

    /// Error code for the relay's error surface.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ChannelHeaderOverrideInvalid { .. } => CHANNEL_HEADER_OVERRIDE_INVALID,
        }
    }
}

/// Result type for header override operations.
pub type HeaderOverrideResult<T> = Result<T, HeaderOverrideError>;
