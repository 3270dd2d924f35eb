//! Metron service advisor library
//!
//! Validates where the Metron components are placed in the cluster and what
//! Storm is configured with, and recommends the metron-env and storm-site
//! values Metron depends on. The host framework helpers are injected through
//! the `StackAdvisor` trait.

pub mod advisor;
pub mod config;
pub mod core;
pub mod error;
pub mod runner;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use advisor::MetronServiceAdvisor;
pub use config::AdvisorConfig;
pub use error::{AdvisorError, AdvisorResult};
pub use runner::AdvisorRequest;
pub use services::{AmbariStackAdvisor, RequestFiles};
pub use traits::{MockStackAdvisor, SiteValidation, StackAdvisor};
