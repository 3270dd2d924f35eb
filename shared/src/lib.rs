//! Shared types for the Metron service advisor
//!
//! Contains the documents exchanged with the cluster manager (services,
//! hosts, configurations, validation items) plus logging helpers used by
//! every binary in the workspace.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{
    // Request documents
    ComponentDescriptor, HostsDescriptor, ServicesDescriptor,

    // Configuration sites
    ConfigSite, Configurations, PropertyValue,

    // Validation findings
    AdvisorItem, PropertyFinding, Severity, ValidationItem, ValidationTarget,
};
