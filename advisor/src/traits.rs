//! Trait definitions with mockall annotations for testing
//!
//! The cluster manager provides a set of helpers every service advisor builds
//! on (host lookups, property setters, item constructors). They are captured
//! here as `StackAdvisor` so the Metron checks can be exercised against mocks
//! or against the Ambari document implementation in `services`.

use shared::{
    AdvisorItem, ComponentDescriptor, ConfigSite, Configurations, PropertyFinding,
    ServicesDescriptor, ValidationItem,
};

use crate::error::AdvisorResult;

/// Helpers supplied by the host framework to every service advisor
#[mockall::automock]
pub trait StackAdvisor {
    /// Hosts running a component, taken from a flattened component list
    ///
    /// # Returns
    /// Host names in the order the framework lists them; empty when the
    /// component is not deployed
    fn get_hosts(&self, components: &[ComponentDescriptor], component_name: &str) -> Vec<String>;

    /// Hosts running a component of a specific service
    fn get_component_host_names(
        &self,
        services: &ServicesDescriptor,
        service_name: &str,
        component_name: &str,
    ) -> Vec<String>;

    /// Properties of a site, if the site is part of the configurations
    fn get_site_properties(&self, configurations: &Configurations, site: &str) -> Option<ConfigSite>;

    /// Set a property on a site, creating the site when needed
    ///
    /// # Parameters
    /// - `configurations`: Configurations being recommended
    /// - `site`: Site name such as `metron-env`
    /// - `name`: Property name
    /// - `value`: New value
    fn put_property(&self, configurations: &mut Configurations, site: &str, name: &str, value: &str);

    /// Build an ERROR level item
    fn get_error_item(&self, message: &str) -> AdvisorItem;

    /// Build a WARN level item
    fn get_warn_item(&self, message: &str) -> AdvisorItem;

    /// Attach property findings to their site, producing configuration items
    fn to_configuration_validation_problems(
        &self,
        findings: Vec<PropertyFinding>,
        site: &str,
    ) -> Vec<ValidationItem>;
}

/// Site-scoped validation built on top of any `StackAdvisor`
pub trait SiteValidation: StackAdvisor {
    /// Run `method` against a site when it has recommendations and current values
    ///
    /// `method` receives the current site properties and the recommended
    /// defaults for the same site. Sites missing from either side produce no
    /// items.
    fn validate_configurations_for_site<F>(
        &self,
        configurations: &Configurations,
        recommended_defaults: &Configurations,
        site: &str,
        method: F,
    ) -> AdvisorResult<Vec<ValidationItem>>
    where
        F: FnOnce(&ConfigSite, &ConfigSite) -> AdvisorResult<Vec<ValidationItem>>,
    {
        let Some(recommendations) = recommended_defaults.site(site) else {
            return Ok(Vec::new());
        };
        match self.get_site_properties(configurations, site) {
            Some(properties) => method(&properties, recommendations),
            None => Ok(Vec::new()),
        }
    }
}

impl<T: StackAdvisor + ?Sized> SiteValidation for T {}
