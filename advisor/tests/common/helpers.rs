//! Test helpers and builder patterns for advisor tests
//!
//! This module provides a cluster builder and shortcuts around the advisor
//! entry points to reduce test boilerplate.
#![allow(dead_code)]

use metron_advisor::{AmbariStackAdvisor, MetronServiceAdvisor};
use shared::{
    ComponentDescriptor, ConfigSite, Configurations, HostsDescriptor, ServicesDescriptor, ValidationItem,
};
use super::fixtures::TestFixtures;

/// Builder for cluster topologies with every component on one host by default
pub struct ClusterBuilder {
    placements: Vec<(String, String, Vec<String>)>,
    storm_site: Option<ConfigSite>,
}

impl ClusterBuilder {
    /// Single node cluster with a valid storm-site
    pub fn new() -> Self {
        let placements = TestFixtures::single_node_components()
            .into_iter()
            .map(|(service, component)| {
                (service.to_string(), component.to_string(), vec![TestFixtures::NODE_1.to_string()])
            })
            .collect();

        let storm_site = ConfigSite::new()
            .with_property("ui.port", TestFixtures::UI_PORT)
            .with_property("topology.classpath", TestFixtures::DESIRED_CLASSPATH)
            .with_property("supervisor.slots.ports", TestFixtures::FIVE_SLOTS);

        Self {
            placements,
            storm_site: Some(storm_site),
        }
    }

    /// Move a component to the given hosts
    pub fn with_hosts(mut self, component: &str, hosts: &[&str]) -> Self {
        for (_, name, assigned) in self.placements.iter_mut() {
            if name == component {
                *assigned = hosts.iter().map(|h| h.to_string()).collect();
            }
        }
        self
    }

    /// Drop a component from the cluster entirely
    pub fn without_component(mut self, component: &str) -> Self {
        self.placements.retain(|(_, name, _)| name != component);
        self
    }

    pub fn with_storm_property(mut self, name: &str, value: &str) -> Self {
        self.storm_site
            .get_or_insert_with(ConfigSite::new)
            .set(name, value);
        self
    }

    pub fn without_storm_property(mut self, name: &str) -> Self {
        if let Some(site) = self.storm_site.as_mut() {
            site.properties.remove(name);
        }
        self
    }

    pub fn without_storm_site(mut self) -> Self {
        self.storm_site = None;
        self
    }

    pub fn build(self) -> ServicesDescriptor {
        let mut services = ServicesDescriptor::default();
        for (service, component, hosts) in &self.placements {
            let hosts: Vec<&str> = hosts.iter().map(String::as_str).collect();
            services.push_component(ComponentDescriptor::new(service, component, &hosts));
        }
        if let Some(storm_site) = self.storm_site {
            services.configurations = Configurations::new().with_site("storm-site", storm_site);
        }
        services
    }
}

/// Shortcuts around the advisor entry points
pub struct TestHelpers;

impl TestHelpers {
    pub fn advisor() -> MetronServiceAdvisor<AmbariStackAdvisor> {
        MetronServiceAdvisor::new(AmbariStackAdvisor::new())
    }

    pub fn layout_items(services: &ServicesDescriptor) -> Vec<ValidationItem> {
        Self::advisor()
            .get_service_component_layout_validations(services, &HostsDescriptor::default())
            .expect("layout validation should succeed")
    }

    /// Validate storm-site using the current configurations as recommended defaults
    pub fn configuration_items(services: &ServicesDescriptor) -> Vec<ValidationItem> {
        Self::advisor()
            .get_service_configurations_validation_items(
                &services.configurations,
                &services.configurations,
                services,
                &HostsDescriptor::default(),
            )
            .expect("configuration validation should succeed")
    }

    /// Run recommendations starting from the cluster's current configurations
    pub fn recommend(services: &ServicesDescriptor) -> Configurations {
        let mut configurations = services.configurations.clone();
        Self::advisor()
            .get_service_configuration_recommendations(
                &mut configurations,
                &serde_json::Value::Null,
                services,
                &HostsDescriptor::default(),
            )
            .expect("recommendations should succeed");
        configurations
    }

    pub fn text(configurations: &Configurations, site: &str, name: &str) -> Option<String> {
        configurations.property(site, name).map(ToString::to_string)
    }

    pub fn errors_for<'a>(items: &'a [ValidationItem], target: &str) -> Vec<&'a ValidationItem> {
        items
            .iter()
            .filter(|item| item.is_error())
            .filter(|item| item.component_name() == Some(target) || item.config_name() == Some(target))
            .collect()
    }
}
