//! In-memory shape registry HTTP service.
//!
//! A small CRUD service over a single ordered collection of shape records,
//! built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request        ┌──────────┐    ┌──────────┐    ┌────────────┐
//!   ────────────────────▶ │   http   │───▶│ handlers │───▶│  registry  │
//!                         │  server  │    │          │    │ (RwLock'd  │
//!   Client Response       │ + layers │◀───│          │◀───│  Vec store)│
//!   ◀──────────────────── └──────────┘    └──────────┘    └────────────┘
//!
//!   Cross-cutting: config (TOML) · lifecycle (signals) · observability
//!   (tracing + lifecycle log file)
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod registry;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use registry::{Shape, ShapeRegistry};
