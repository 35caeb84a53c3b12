//! Structured logging and the lifecycle log.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber (env filter, fmt layer)
//! - Append timestamped startup/shutdown lines to the lifecycle log file
//!
//! # Design Decisions
//! - Uses tracing crate for structured runtime logging
//! - RUST_LOG overrides the configured level when set
//! - Lifecycle log write failures degrade to a warning, never abort

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// Initialize the tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from the configured
/// log level.
pub fn init_tracing(config: &ObservabilityConfig) {
    let default_filter = format!(
        "shape_service={level},tower_http={level}",
        level = config.log_level
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Append-only log file receiving one timestamped line on process start and
/// one on process stop.
pub struct LifecycleLog {
    path: PathBuf,
}

impl LifecycleLog {
    /// Create a handle for the given log file path. The file itself is
    /// opened lazily on each append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Record the startup line.
    pub fn record_startup(&self) {
        self.append("Application starts");
    }

    /// Record the shutdown line.
    pub fn record_shutdown(&self) {
        self.append("Application shutdown");
    }

    fn append(&self, event: &str) {
        if let Err(e) = append_line(&self.path, event) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to write lifecycle log"
            );
        }
    }
}

/// Open the file in create+append mode and write one stamped line.
fn append_line(path: &Path, event: &str) -> std::io::Result<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let stamp = Local::now().format("%d/%m/%Y %H:%M:%S");
    writeln!(file, "{} - {}", stamp, event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("lifecycle-{}", uuid::Uuid::new_v4()))
            .join("service.log")
    }

    #[test]
    fn test_startup_and_shutdown_lines_appended() {
        let path = temp_log_path();
        let log = LifecycleLog::new(&path);

        log.record_startup();
        log.record_shutdown();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - Application starts"));
        assert!(lines[1].ends_with(" - Application shutdown"));

        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_timestamp_format() {
        let path = temp_log_path();
        let log = LifecycleLog::new(&path);

        log.record_startup();

        let content = std::fs::read_to_string(&path).unwrap();
        let stamp = content.split(" - ").next().unwrap();
        // DD/MM/YYYY HH:MM:SS
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[2..3], "/");
        assert_eq!(&stamp[5..6], "/");
        assert_eq!(&stamp[10..11], " ");

        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
