//! Shared logging utilities for consistent tracing across advisor runs
//!
//! Output goes to stderr: stdout is reserved for the JSON answer the
//! cluster manager reads back.

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::types::AdvisorAction;

/// Build the filter directive for the advisor crates at the given level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("metron_advisor={base_level},shared={base_level}")
}

/// Initialize tracing subscriber with an optional log level
///
/// A `RUST_LOG` value takes precedence over the level passed in.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)));

    // A subscriber may already be installed when embedded in a larger host
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Initialize tracing subscriber at the default level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for action-aware info logging
#[macro_export]
macro_rules! advisor_info {
    ($action:expr, $($arg:tt)*) => {
        tracing::info!(
            action = %$action,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for action-aware warning logging
#[macro_export]
macro_rules! advisor_warn {
    ($action:expr, $($arg:tt)*) => {
        tracing::warn!(
            action = %$action,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for action-aware error logging
#[macro_export]
macro_rules! advisor_error {
    ($action:expr, $($arg:tt)*) => {
        tracing::error!(
            action = %$action,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for action-aware debug logging
#[macro_export]
macro_rules! advisor_debug {
    ($action:expr, $($arg:tt)*) => {
        tracing::debug!(
            action = %$action,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(action: AdvisorAction, details: &str) {
    info!(
        action = %action,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(action: AdvisorAction, context: &str, error: &dyn std::fmt::Display) {
    error!(
        action = %action,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(action: AdvisorAction, message: &str) {
    info!(
        action = %action,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
