//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → router.rs (channel lookup)
//!     → matcher.rs (evaluate path prefix)
//!     → Return: matched channel + upstream path, or NoMatch
//!
//! Route Compilation (at startup):
//!     ChannelConfig[]
//!     → Compile prefix matchers
//!     → Sort by prefix length
//!     → Freeze as immutable ChannelRouter
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always matches same channel

pub mod matcher;
pub mod router;

pub use router::{ChannelRouter, RouteMatch};
