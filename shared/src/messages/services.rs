//! Service topology as handed over by the cluster manager
//!
//! Mirrors the `services.json` document: every service lists its components,
//! and every component carries the hosts it is assigned to.

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};
use crate::messages::configurations::Configurations;

/// Root of the services document
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ServicesDescriptor {
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
    /// Current configuration of every site in the cluster
    #[serde(default)]
    pub configurations: Configurations,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ServiceEntry {
    #[serde(rename = "StackServices", default)]
    pub stack_service: StackService,
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StackService {
    pub service_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ComponentEntry {
    #[serde(rename = "StackServiceComponents")]
    pub component: ComponentDescriptor,
}

/// A deployable unit of a service and the hosts it runs on
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ComponentDescriptor {
    pub component_name: String,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub hostnames: Vec<String>,
}

impl ComponentDescriptor {
    pub fn new(service_name: &str, component_name: &str, hostnames: &[&str]) -> Self {
        Self {
            component_name: component_name.to_string(),
            service_name: service_name.to_string(),
            hostnames: hostnames.iter().map(|h| h.to_string()).collect(),
        }
    }
}

impl ServicesDescriptor {
    pub fn from_json_str(input: &str) -> SharedResult<Self> {
        serde_json::from_str(input).map_err(|e| SharedError::DeserializationError {
            message: format!("services document: {e}"),
        })
    }

    /// Flatten the per-service component lists into one sequence
    pub fn component_descriptors(&self) -> Vec<ComponentDescriptor> {
        self.services
            .iter()
            .flat_map(|service| service.components.iter())
            .map(|entry| entry.component.clone())
            .collect()
    }

    pub fn service(&self, service_name: &str) -> Option<&ServiceEntry> {
        self.services
            .iter()
            .find(|service| service.stack_service.service_name == service_name)
    }

    /// Add a component under its service, creating the service entry when needed
    pub fn push_component(&mut self, component: ComponentDescriptor) {
        let entry = ComponentEntry { component };
        let service_name = entry.component.service_name.clone();
        match self
            .services
            .iter_mut()
            .find(|service| service.stack_service.service_name == service_name)
        {
            Some(service) => service.components.push(entry),
            None => self.services.push(ServiceEntry {
                stack_service: StackService { service_name },
                components: vec![entry],
            }),
        }
    }
}
