//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Channel names unique, prefixes well-formed, base URLs parseable
//! - Header override blocks accepted by the spec builder
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::config::schema::{ChannelConfig, RelayConfig};
use crate::header_override::{build_header_override_spec, HeaderOverrideError};

/// Placeholder key used to dry-run header override blocks.
const VALIDATION_API_KEY: &str = "validation-key";

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("channel #{index} has an empty name")]
    EmptyChannelName { index: usize },

    #[error("duplicate channel name '{0}'")]
    DuplicateChannel(String),

    #[error("channel '{channel}': path_prefix '{prefix}' must start with '/'")]
    InvalidPathPrefix { channel: String, prefix: String },

    #[error("channel '{channel}': invalid base_url '{url}': {reason}")]
    InvalidBaseUrl {
        channel: String,
        url: String,
        reason: String,
    },

    #[error("channel '{channel}': {source}")]
    HeaderOverride {
        channel: String,
        source: HeaderOverrideError,
    },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, channel) in config.channels.iter().enumerate() {
        if channel.name.trim().is_empty() {
            errors.push(ValidationError::EmptyChannelName { index });
        } else if !seen.insert(channel.name.as_str()) {
            errors.push(ValidationError::DuplicateChannel(channel.name.clone()));
        }
        validate_channel(channel, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_channel(channel: &ChannelConfig, errors: &mut Vec<ValidationError>) {
    if !channel.path_prefix.starts_with('/') {
        errors.push(ValidationError::InvalidPathPrefix {
            channel: channel.name.clone(),
            prefix: channel.path_prefix.clone(),
        });
    }

    if let Err(e) = Url::parse(&channel.base_url) {
        errors.push(ValidationError::InvalidBaseUrl {
            channel: channel.name.clone(),
            url: channel.base_url.clone(),
            reason: e.to_string(),
        });
    }

    if let Err(source) =
        build_header_override_spec(channel.header_override.as_ref(), VALIDATION_API_KEY)
    {
        errors.push(ValidationError::HeaderOverride {
            channel: channel.name.clone(),
            source,
        });
    }
}
