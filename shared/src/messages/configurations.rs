//! Configuration sites and their property values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value of a single site property
///
/// The cluster manager mostly sends strings, but list-valued properties such
/// as `supervisor.slots.ports` may arrive as a JSON array or a bare number.
/// Anything else is kept verbatim in `Other`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Integer(i64),
    List(Vec<serde_json::Value>),
    Other(serde_json::Value),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(text) => f.write_str(text),
            PropertyValue::Integer(value) => write!(f, "{value}"),
            PropertyValue::List(values) => {
                let joined = values
                    .iter()
                    .map(|value| match value {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(",");
                f.write_str(&joined)
            }
            PropertyValue::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

/// Properties of one named configuration group, e.g. `storm-site`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ConfigSite {
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl ConfigSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<PropertyValue>) {
        self.properties.insert(name.to_string(), value.into());
    }
}

/// Site name to site properties
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Configurations(BTreeMap<String, ConfigSite>);

impl Configurations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site(mut self, name: &str, site: ConfigSite) -> Self {
        self.0.insert(name.to_string(), site);
        self
    }

    pub fn site(&self, name: &str) -> Option<&ConfigSite> {
        self.0.get(name)
    }

    /// Mutable access to a site, creating it empty when absent
    pub fn site_mut(&mut self, name: &str) -> &mut ConfigSite {
        self.0.entry(name.to_string()).or_default()
    }

    pub fn contains_site(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Look up one property of one site
    pub fn property(&self, site: &str, name: &str) -> Option<&PropertyValue> {
        self.site(site).and_then(|s| s.get(name))
    }

    pub fn site_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
