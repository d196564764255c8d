//! Lifecycle management.
//!
//! # Design Decisions
//! - Graceful shutdown: in-flight relay calls finish before exit
//! - The server takes its shutdown future as a parameter so tests can
//!   stop it without signals

pub mod signals;

pub use signals::shutdown_signal;
