//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::errors::SharedError;

/// Entry points the host framework can invoke on the advisor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvisorAction {
    /// Check where Metron components are placed relative to their dependencies
    ValidateComponentLayout,
    /// Check storm-site values against what Metron needs
    ValidateConfigurations,
    /// Fill in metron-env and storm-site values
    RecommendConfigurations,
}

impl AdvisorAction {
    pub const ALL: [AdvisorAction; 3] = [
        AdvisorAction::ValidateComponentLayout,
        AdvisorAction::ValidateConfigurations,
        AdvisorAction::RecommendConfigurations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisorAction::ValidateComponentLayout => "validate-component-layout",
            AdvisorAction::ValidateConfigurations => "validate-configurations",
            AdvisorAction::RecommendConfigurations => "recommend-configurations",
        }
    }

    /// Whether the action answers with validation items
    pub fn is_validation(&self) -> bool {
        !matches!(self, AdvisorAction::RecommendConfigurations)
    }
}

impl fmt::Display for AdvisorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AdvisorAction {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        AdvisorAction::ALL
            .into_iter()
            .find(|action| action.as_str() == normalized)
            .ok_or_else(|| SharedError::UnknownAction {
                input: s.to_string(),
            })
    }
}

/// Component name to the ordered list of hosts it is deployed on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentPlacement {
    components: BTreeMap<String, Vec<String>>,
}

impl ComponentPlacement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the hosts of a component, replacing any previous entry
    pub fn insert(&mut self, component: impl Into<String>, hosts: Vec<String>) {
        self.components.insert(component.into(), hosts);
    }

    pub fn with_component(mut self, component: &str, hosts: &[&str]) -> Self {
        self.insert(component, hosts.iter().map(|h| h.to_string()).collect());
        self
    }

    /// Hosts of a component; empty when the component is not deployed
    pub fn hosts(&self, component: &str) -> &[String] {
        self.components
            .get(component)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn first_host(&self, component: &str) -> Option<&str> {
        self.hosts(component).first().map(String::as_str)
    }

    pub fn runs_on(&self, component: &str, host: &str) -> bool {
        self.hosts(component).iter().any(|h| h == host)
    }

    pub fn distinct_host_count(&self, component: &str) -> usize {
        self.hosts(component)
            .iter()
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
