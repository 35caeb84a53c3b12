//! Shape registry subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → ShapeRegistry (owned store, injected via axum State)
//!     → RwLock<Vec<Shape>> (first-match linear scans)
//! ```
//!
//! # Design Decisions
//! - The store is an explicitly owned object passed into handlers, not a
//!   global mutable collection
//! - First-match semantics on duplicate identifiers are preserved exactly

pub mod store;
pub mod types;

pub use store::ShapeRegistry;
pub use types::{RegistryError, Shape, UpsertOutcome};
