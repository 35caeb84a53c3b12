//! Logging and diagnostics subsystem.

pub mod logging;

pub use logging::{init_tracing, LifecycleLog};
