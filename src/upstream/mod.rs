//! Upstream quote provider subsystem.
//!
//! # Data Flow
//! ```text
//! validated request
//!     → client.rs (single GET, auth headers, timeout)
//!     → types.rs (classify: transport / empty body / missing price / success)
//!     → normalized quote or failure, mapped to a response by the handler
//! ```

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{NormalizedQuote, UpstreamOutcome};
