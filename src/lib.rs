//! Channel header override relay library.

pub mod config;
pub mod header_override;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;
pub mod routing;

pub use config::schema::RelayConfig;
pub use header_override::{apply_header_override, build_header_override_spec, HeaderOverrideSpec};
pub use http::RelayServer;
