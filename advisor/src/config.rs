//! Advisor configuration
//!
//! Values are loaded from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over .env file values, and command
//! line flags take precedence over both.
//!
//! ## Recognised variables
//! - `METRON_ADVISOR_MIN_SLOTS`: minimum Storm slots across the cluster (default 5)
//! - `METRON_ADVISOR_LOG_LEVEL`: tracing level (default `info`)

use crate::error::{AdvisorError, AdvisorResult};

/// A default install runs 3 parser topologies, 1 enrichment and 1 indexing
pub const DEFAULT_MIN_STORM_SLOTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Minimum number of Storm worker slots the whole cluster must provide
    pub min_storm_slots: usize,
    pub log_level: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            min_storm_slots: DEFAULT_MIN_STORM_SLOTS,
            log_level: "info".to_string(),
        }
    }
}

impl AdvisorConfig {
    const MIN_SLOTS_VAR: &'static str = "METRON_ADVISOR_MIN_SLOTS";
    const LOG_LEVEL_VAR: &'static str = "METRON_ADVISOR_LOG_LEVEL";
    const LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> AdvisorResult<Self> {
        // Missing .env file is fine
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> AdvisorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(Self::MIN_SLOTS_VAR) {
            let slots = raw.trim().parse().map_err(|_| {
                AdvisorError::config(format!("{} must be a positive integer, got '{raw}'", Self::MIN_SLOTS_VAR))
            })?;
            config = config.with_min_storm_slots(slots)?;
        }

        if let Some(level) = lookup(Self::LOG_LEVEL_VAR) {
            config = config.with_log_level(&level)?;
        }

        Ok(config)
    }

    /// Zero would switch the capacity check off, so it is rejected
    pub fn with_min_storm_slots(mut self, slots: usize) -> AdvisorResult<Self> {
        if slots == 0 {
            return Err(AdvisorError::config(format!(
                "minimum Storm slots must be a positive integer, got {slots}"
            )));
        }
        self.min_storm_slots = slots;
        Ok(self)
    }

    pub fn with_log_level(mut self, level: &str) -> AdvisorResult<Self> {
        let level = level.trim().to_lowercase();
        if !Self::LOG_LEVELS.contains(&level.as_str()) {
            return Err(AdvisorError::config(format!(
                "log level must be one of {}, got '{level}'",
                Self::LOG_LEVELS.join(", ")
            )));
        }
        self.log_level = level;
        Ok(self)
    }
}
