//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing, timeout)
//!     → routing layer picks the channel
//!     → request.rs (strip hop-by-hop headers, build upstream URL)
//!     → header_override (remove → fill → override)
//!     → upstream call, response streamed back
//!     → response.rs (relay errors as JSON)
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::RelayError;
pub use server::RelayServer;
