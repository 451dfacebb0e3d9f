//! Stock price proxy library.
//!
//! A single-endpoint HTTP proxy in front of a stock-quote provider:
//! validates query parameters, forwards the lookup upstream, and maps the
//! provider's failure modes onto distinct status codes.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
