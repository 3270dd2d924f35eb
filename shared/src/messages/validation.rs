//! Validation findings reported back to the cluster manager
//!
//! Field names follow what the cluster manager UI expects
//! (`type`, `level`, `component-name`, `config-type`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "WARN")]
    Warn,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warn => write!(f, "WARN"),
        }
    }
}

/// A bare level + message pair, not yet attached to anything
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AdvisorItem {
    pub level: Severity,
    pub message: String,
}

impl AdvisorItem {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: Severity::Warn,
            message: message.into(),
        }
    }
}

/// An item raised against a property of a site still to be named
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PropertyFinding {
    #[serde(rename = "config-name")]
    pub config_name: String,
    pub item: AdvisorItem,
}

impl PropertyFinding {
    pub fn new(config_name: &str, item: AdvisorItem) -> Self {
        Self {
            config_name: config_name.to_string(),
            item,
        }
    }
}

/// What a validation item points at
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ValidationTarget {
    #[serde(rename = "host-component")]
    HostComponent {
        #[serde(rename = "component-name")]
        component_name: String,
        host: String,
    },
    #[serde(rename = "configuration")]
    Configuration {
        #[serde(rename = "config-type")]
        config_type: String,
        #[serde(rename = "config-name")]
        config_name: String,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidationItem {
    pub level: Severity,
    pub message: String,
    #[serde(flatten)]
    pub target: ValidationTarget,
}

impl ValidationItem {
    pub fn host_component(level: Severity, message: impl Into<String>, component_name: &str, host: &str) -> Self {
        Self {
            level,
            message: message.into(),
            target: ValidationTarget::HostComponent {
                component_name: component_name.to_string(),
                host: host.to_string(),
            },
        }
    }

    pub fn configuration(item: AdvisorItem, config_type: &str, config_name: &str) -> Self {
        Self {
            level: item.level,
            message: item.message,
            target: ValidationTarget::Configuration {
                config_type: config_type.to_string(),
                config_name: config_name.to_string(),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Severity::Error
    }

    /// Component name for host-component items
    pub fn component_name(&self) -> Option<&str> {
        match &self.target {
            ValidationTarget::HostComponent { component_name, .. } => Some(component_name.as_str()),
            ValidationTarget::Configuration { .. } => None,
        }
    }

    /// Property name for configuration items
    pub fn config_name(&self) -> Option<&str> {
        match &self.target {
            ValidationTarget::Configuration { config_name, .. } => Some(config_name.as_str()),
            ValidationTarget::HostComponent { .. } => None,
        }
    }
}
