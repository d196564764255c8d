//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, header override dry run)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc with the relay server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Header override blocks stay untyped until a relay call builds them

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::RelayConfig;
pub use schema::ListenerConfig;
pub use schema::ChannelConfig;
pub use schema::{LogFormat, ObservabilityConfig, TimeoutConfig};
