//! Channel lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled channel routes
//! - Look up the channel for a request path
//! - Return matched channel or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) path prefix scan (acceptable for typical channel counts)
//! - Longest prefix wins; ties go to the channel listed first

use std::sync::Arc;

use crate::config::ChannelConfig;
use crate::routing::matcher::PathPrefixMatcher;

/// A channel together with its compiled matcher.
#[derive(Debug, Clone)]
pub struct ChannelRoute {
    pub channel: Arc<ChannelConfig>,
    pub matcher: PathPrefixMatcher,
}

/// A channel selected for one request.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    pub channel: &'a Arc<ChannelConfig>,
    /// Request path with the channel prefix removed.
    pub upstream_path: &'a str,
}

/// Routes request paths to channels.
#[derive(Debug, Default)]
pub struct ChannelRouter {
    routes: Vec<ChannelRoute>,
}

impl ChannelRouter {
    /// Compile routes from the channel list.
    pub fn from_config(channels: Vec<ChannelConfig>) -> Self {
        let mut routes: Vec<ChannelRoute> = channels
            .into_iter()
            .map(|channel| ChannelRoute {
                matcher: PathPrefixMatcher::new(channel.path_prefix.clone()),
                channel: Arc::new(channel),
            })
            .collect();
        // Stable sort keeps config order among equal prefixes.
        routes.sort_by(|a, b| b.matcher.specificity().cmp(&a.matcher.specificity()));
        Self { routes }
    }

    /// Find the channel for a request path.
    pub fn match_path<'a>(&'a self, path: &'a str) -> Option<RouteMatch<'a>> {
        self.routes
            .iter()
            .find(|route| route.matcher.matches(path))
            .map(|route| RouteMatch {
                channel: &route.channel,
                upstream_path: route.matcher.strip(path),
            })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
