//! Process lifecycle subsystem.
//!
//! # Responsibilities
//! - Translate OS signals into graceful shutdown
//!
//! Startup ordering lives in `main`: config → tracing → lifecycle log →
//! registry → listener → serve. Fail fast: any startup error is fatal.

pub mod signals;

pub use signals::shutdown_signal;
