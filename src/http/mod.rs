//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID tagging)
//!     → handlers.rs (shape registry operations)
//!     → error.rs (domain misses → 404 responses)
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::MakeUuidRequestId;
pub use server::{AppState, HttpServer};
