//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID assigned and echoed)
//!     → page dispatcher → RouteTable → view activate/render
//!     → api.rs (JSON data API)
//!     → Send to client
//! ```

pub mod api;
pub mod request;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer, ServerError};
