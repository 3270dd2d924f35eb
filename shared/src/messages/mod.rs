//! Documents exchanged with the cluster manager
//!
//! This module organizes the request and response documents by category:
//! - `services`: service topology and component placement
//! - `hosts`: cluster host inventory
//! - `configurations`: configuration sites and property values
//! - `validation`: validation findings returned to the UI

pub mod configurations;
pub mod hosts;
pub mod services;
pub mod validation;

pub use configurations::{ConfigSite, Configurations, PropertyValue};

pub use hosts::{HostEntry, HostInfo, HostsDescriptor};

pub use services::{
    ComponentDescriptor, ComponentEntry, ServiceEntry, ServicesDescriptor, StackService,
};

pub use validation::{AdvisorItem, PropertyFinding, Severity, ValidationItem, ValidationTarget};
