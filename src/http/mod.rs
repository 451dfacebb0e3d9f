//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (query validation)
//!     → [upstream fetch & classify]
//!     → response.rs (wire shapes, status mapping)
//!     → Send to client
//! ```

pub mod price;
pub mod request;
pub mod response;
pub mod server;

pub use server::HttpServer;
