//! Service implementations
//!
//! This module contains the production implementations used by the binary:
//! the Ambari-backed `StackAdvisor` and request file handling.

pub mod ambari;
pub mod request_files;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use ambari::AmbariStackAdvisor;
pub use request_files::{RequestFiles, write_response};
