//! Cluster host inventory

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HostsDescriptor {
    #[serde(default)]
    pub items: Vec<HostEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HostEntry {
    #[serde(rename = "Hosts")]
    pub host: HostInfo,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HostInfo {
    pub host_name: String,
}

impl HostsDescriptor {
    pub fn from_json_str(input: &str) -> SharedResult<Self> {
        serde_json::from_str(input).map_err(|e| SharedError::DeserializationError {
            message: format!("hosts document: {e}"),
        })
    }

    pub fn from_host_names(names: &[&str]) -> Self {
        Self {
            items: names
                .iter()
                .map(|name| HostEntry {
                    host: HostInfo {
                        host_name: name.to_string(),
                    },
                })
                .collect(),
        }
    }

    pub fn host_names(&self) -> Vec<&str> {
        self.items.iter().map(|entry| entry.host.host_name.as_str()).collect()
    }
}
