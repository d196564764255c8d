//! Channel header override subsystem.
//!
//! # Data Flow
//! ```text
//! channel config (untyped header_override block)
//!     → shape.rs (legacy flat map vs structured override/fill/remove)
//!     → builder.rs (validate sections, substitute {api_key})
//!     → HeaderOverrideSpec (per relay call)
//!     → apply.rs (remove → fill → override on the outbound headers)
//! ```
//!
//! # Design Decisions
//! - All fallible work happens in the builder; applying never fails
//! - Header names are canonicalized at apply time, not at build time
//! - Nothing here is cached or shared between relay calls

pub mod apply;
pub mod builder;
pub mod canonical;
pub mod collection;
pub mod error;
pub mod shape;
pub mod spec;
pub mod variables;

pub use apply::apply_header_override;
pub use builder::build_header_override_spec;
pub use canonical::canonical_header_name;
pub use collection::HeaderCollection;
pub use error::{HeaderOverrideError, HeaderOverrideResult, CHANNEL_HEADER_OVERRIDE_INVALID};
pub use shape::OverrideShape;
pub use spec::HeaderOverrideSpec;
