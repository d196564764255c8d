//! Relay call plumbing shared by the server and the CLI.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → routing (pick channel)
//!     → context.rs (RelayInfo: request ID, channel, API key)
//!     → header_override (build spec, apply to outbound headers)
//!     → upstream call
//! ```

pub mod context;

pub use context::{RelayInfo, RequestContext};
