//! Stack advisor helpers backed by the Ambari request documents
//!
//! Production implementation of `StackAdvisor`: everything is answered from
//! the services and configurations documents the cluster manager sends.

use shared::{
    AdvisorItem, ComponentDescriptor, ConfigSite, Configurations, PropertyFinding,
    ServicesDescriptor, ValidationItem,
};

use crate::traits::StackAdvisor;

#[derive(Debug, Clone, Copy, Default)]
pub struct AmbariStackAdvisor;

impl AmbariStackAdvisor {
    pub fn new() -> Self {
        Self
    }
}

impl StackAdvisor for AmbariStackAdvisor {
    fn get_hosts(&self, components: &[ComponentDescriptor], component_name: &str) -> Vec<String> {
        components
            .iter()
            .filter(|component| component.component_name == component_name)
            .flat_map(|component| component.hostnames.iter().cloned())
            .collect()
    }

    fn get_component_host_names(
        &self,
        services: &ServicesDescriptor,
        service_name: &str,
        component_name: &str,
    ) -> Vec<String> {
        services
            .service(service_name)
            .map(|service| {
                service
                    .components
                    .iter()
                    .map(|entry| &entry.component)
                    .filter(|component| component.component_name == component_name)
                    .flat_map(|component| component.hostnames.iter().cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn get_site_properties(&self, configurations: &Configurations, site: &str) -> Option<ConfigSite> {
        configurations.site(site).cloned()
    }

    fn put_property(&self, configurations: &mut Configurations, site: &str, name: &str, value: &str) {
        tracing::debug!(site, name, value, "Setting recommended property");
        configurations.site_mut(site).set(name, value);
    }

    fn get_error_item(&self, message: &str) -> AdvisorItem {
        AdvisorItem::error(message)
    }

    fn get_warn_item(&self, message: &str) -> AdvisorItem {
        AdvisorItem::warn(message)
    }

    fn to_configuration_validation_problems(
        &self,
        findings: Vec<PropertyFinding>,
        site: &str,
    ) -> Vec<ValidationItem> {
        findings
            .into_iter()
            .map(|finding| ValidationItem::configuration(finding.item, site, &finding.config_name))
            .collect()
    }
}
