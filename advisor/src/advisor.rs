//! Metron service advisor
//!
//! Entry points the cluster manager calls during configuration review. The
//! host framework helpers are injected through `StackAdvisor`, which keeps
//! every check testable against mocks.

use shared::{
    AdvisorAction, ComponentPlacement, ConfigSite, Configurations, HostsDescriptor, PropertyFinding,
    ServicesDescriptor, ValidationItem, advisor_debug, advisor_info,
};

use crate::{
    config::AdvisorConfig,
    core::{
        merge_classpath, missing_path_segments,
        placement::{self, LAYOUT_COMPONENTS, METRON_ENRICHMENT_MYSQL_SERVER, STORM_UI_SERVER, SUPERVISOR},
        slots_per_supervisor,
        storm_site::{
            METRON_ENV, MYSQL_HOST, STORM_REST_ADDR, STORM_SITE, STORM_SITE_DESIRED_VALUES,
            SUPERVISOR_SLOTS_PORTS, TOPOLOGY_CLASSPATH, UI_PORT,
        },
        SlotCapacity,
    },
    error::{AdvisorError, AdvisorResult},
    traits::{SiteValidation, StackAdvisor},
};

const METRON_SERVICE: &str = "METRON";
const STORM_SERVICE: &str = "STORM";

/// Service advisor for the Metron service
pub struct MetronServiceAdvisor<H>
where
    H: StackAdvisor,
{
    /// Injected host framework helpers
    host: H,
    config: AdvisorConfig,
}

impl<H> MetronServiceAdvisor<H>
where
    H: StackAdvisor,
{
    /// Create advisor with default configuration
    pub fn new(host: H) -> Self {
        Self::with_config(host, AdvisorConfig::default())
    }

    pub fn with_config(host: H, config: AdvisorConfig) -> Self {
        Self { host, config }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Collect the hosts of every component the layout rules need
    pub fn component_placement(&self, services: &ServicesDescriptor) -> ComponentPlacement {
        let components = services.component_descriptors();
        let mut placement = ComponentPlacement::new();
        for component in LAYOUT_COMPONENTS {
            placement.insert(component, self.host.get_hosts(&components, component));
        }
        placement
    }

    /// Validate where Metron components are placed
    pub fn get_service_component_layout_validations(
        &self,
        services: &ServicesDescriptor,
        _hosts: &HostsDescriptor,
    ) -> AdvisorResult<Vec<ValidationItem>> {
        let placement = self.component_placement(services);
        self.validate_placement(&placement)
    }

    /// Check co-location rules against an already built placement
    pub fn validate_placement(&self, placement: &ComponentPlacement) -> AdvisorResult<Vec<ValidationItem>> {
        let items = placement::check_placement(placement)?;
        advisor_info!(
            AdvisorAction::ValidateComponentLayout,
            "Component layout produced {} items",
            items.len()
        );
        Ok(items)
    }

    /// Validate storm-site when the cluster manager has recommendations for it
    pub fn get_service_configurations_validation_items(
        &self,
        configurations: &Configurations,
        recommended_defaults: &Configurations,
        services: &ServicesDescriptor,
        _hosts: &HostsDescriptor,
    ) -> AdvisorResult<Vec<ValidationItem>> {
        let placement = self.component_placement(services);
        self.host.validate_configurations_for_site(
            configurations,
            recommended_defaults,
            STORM_SITE,
            |properties, _recommendations| self.validate_storm_site_configurations(properties, &placement),
        )
    }

    /// Check storm-site properties and cluster slot capacity
    pub fn validate_storm_site_configurations(
        &self,
        storm_site: &ConfigSite,
        placement: &ComponentPlacement,
    ) -> AdvisorResult<Vec<ValidationItem>> {
        let mut findings = Vec::new();

        for &(property, desired_value) in STORM_SITE_DESIRED_VALUES {
            match storm_site.get(property) {
                None => {
                    let message = format!(
                        "Metron requires this property to be set to the recommended value of {desired_value}"
                    );
                    let item = if property == TOPOLOGY_CLASSPATH {
                        self.host.get_error_item(&message)
                    } else {
                        self.host.get_warn_item(&message)
                    };
                    findings.push(PropertyFinding::new(property, item));
                }
                Some(current) => {
                    let current = current.to_string();
                    // One finding per property however many paths are missing
                    if current != desired_value && !missing_path_segments(desired_value, &current).is_empty() {
                        let message = format!("Metron requires this property to contain {desired_value}");
                        findings.push(PropertyFinding::new(property, self.host.get_error_item(&message)));
                    }
                }
            }
        }

        let capacity = SlotCapacity::new(
            slots_per_supervisor(storm_site.get(SUPERVISOR_SLOTS_PORTS)),
            placement.distinct_host_count(SUPERVISOR),
        );
        advisor_debug!(
            AdvisorAction::ValidateConfigurations,
            "Storm capacity: {} slots x {} supervisors",
            capacity.slots_per_supervisor,
            capacity.supervisors
        );
        if !capacity.is_sufficient(self.config.min_storm_slots) {
            let message = capacity.shortfall_message(self.config.min_storm_slots);
            findings.push(PropertyFinding::new(SUPERVISOR_SLOTS_PORTS, self.host.get_error_item(&message)));
        }

        let items = self.host.to_configuration_validation_problems(findings, STORM_SITE);
        advisor_info!(
            AdvisorAction::ValidateConfigurations,
            "storm-site validation produced {} items",
            items.len()
        );
        Ok(items)
    }

    /// Recommend metron-env and storm-site values, mutating `configurations`
    pub fn get_service_configuration_recommendations(
        &self,
        configurations: &mut Configurations,
        _cluster_data: &serde_json::Value,
        services: &ServicesDescriptor,
        _hosts: &HostsDescriptor,
    ) -> AdvisorResult<()> {
        let mysql_host = self.first_component_host(services, METRON_SERVICE, METRON_ENRICHMENT_MYSQL_SERVER)?;
        self.host.put_property(configurations, METRON_ENV, MYSQL_HOST, &mysql_host);

        let Some(storm_site) = services.configurations.site(STORM_SITE) else {
            advisor_debug!(
                AdvisorAction::RecommendConfigurations,
                "No storm-site in the cluster, skipping Storm recommendations"
            );
            return Ok(());
        };

        let ui_host = self.first_component_host(services, STORM_SERVICE, STORM_UI_SERVER)?;
        let ui_port = storm_site
            .get(UI_PORT)
            .ok_or_else(|| AdvisorError::missing_property(STORM_SITE, UI_PORT))?;
        let storm_rest_addr = format!("{ui_host}:{ui_port}");
        self.host.put_property(configurations, METRON_ENV, STORM_REST_ADDR, &storm_rest_addr);

        for &(property, desired_value) in STORM_SITE_DESIRED_VALUES {
            match storm_site.get(property) {
                None => self.host.put_property(configurations, STORM_SITE, property, desired_value),
                Some(current) if property == TOPOLOGY_CLASSPATH => {
                    let current = current.to_string();
                    if current != desired_value {
                        let merged = merge_classpath(&current, desired_value);
                        self.host.put_property(configurations, STORM_SITE, property, &merged);
                    }
                }
                Some(_) => {}
            }
        }

        advisor_info!(
            AdvisorAction::RecommendConfigurations,
            "Recommended mysql_host={} storm_rest_addr={}",
            mysql_host,
            storm_rest_addr
        );
        Ok(())
    }

    fn first_component_host(
        &self,
        services: &ServicesDescriptor,
        service_name: &str,
        component_name: &str,
    ) -> AdvisorResult<String> {
        self.host
            .get_component_host_names(services, service_name, component_name)
            .into_iter()
            .next()
            .ok_or_else(|| AdvisorError::missing_component(component_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockStackAdvisor;
    use mockall::predicate::eq;
    use shared::{AdvisorItem, ComponentDescriptor};

    fn item_builders(host: &mut MockStackAdvisor) {
        host.expect_get_error_item().returning(|message| AdvisorItem::error(message));
        host.expect_get_warn_item().returning(|message| AdvisorItem::warn(message));
        host.expect_to_configuration_validation_problems()
            .returning(|findings, site| {
                findings
                    .into_iter()
                    .map(|finding| ValidationItem::configuration(finding.item, site, &finding.config_name))
                    .collect()
            });
    }

    #[test]
    fn test_placement_is_built_through_host_lookups() {
        let mut host = MockStackAdvisor::new();
        host.expect_get_hosts()
            .times(LAYOUT_COMPONENTS.len())
            .returning(|_, component| vec![format!("{}-host", component.to_lowercase())]);

        let advisor = MetronServiceAdvisor::new(host);
        let placement = advisor.component_placement(&ServicesDescriptor::default());

        assert_eq!(placement.first_host(SUPERVISOR), Some("supervisor-host"));
        assert_eq!(placement.components().count(), LAYOUT_COMPONENTS.len());
    }

    #[test]
    fn test_mysql_host_recommended_without_storm_site() {
        let mut host = MockStackAdvisor::new();
        host.expect_get_component_host_names()
            .with(mockall::predicate::always(), eq("METRON"), eq(METRON_ENRICHMENT_MYSQL_SERVER))
            .times(1)
            .returning(|_, _, _| vec!["node3".to_string()]);
        host.expect_put_property()
            .with(
                mockall::predicate::always(),
                eq(METRON_ENV),
                eq(MYSQL_HOST),
                eq("node3"),
            )
            .times(1)
            .returning(|configurations, site, name, value| configurations.site_mut(site).set(name, value));

        let advisor = MetronServiceAdvisor::new(host);
        let mut configurations = Configurations::new();
        advisor
            .get_service_configuration_recommendations(
                &mut configurations,
                &serde_json::Value::Null,
                &ServicesDescriptor::default(),
                &HostsDescriptor::default(),
            )
            .unwrap();

        assert_eq!(
            configurations.property(METRON_ENV, MYSQL_HOST).map(ToString::to_string),
            Some("node3".to_string())
        );
        assert!(!configurations.contains_site(STORM_SITE));
    }

    #[test]
    fn test_recommendation_without_mysql_server_fails() {
        let mut host = MockStackAdvisor::new();
        host.expect_get_component_host_names().returning(|_, _, _| Vec::new());
        host.expect_put_property().times(0);

        let advisor = MetronServiceAdvisor::new(host);
        let result = advisor.get_service_configuration_recommendations(
            &mut Configurations::new(),
            &serde_json::Value::Null,
            &ServicesDescriptor::default(),
            &HostsDescriptor::default(),
        );

        assert!(matches!(result, Err(AdvisorError::MissingComponent { .. })));
    }

    #[test]
    fn test_missing_ui_port_is_reported() {
        let mut host = MockStackAdvisor::new();
        host.expect_get_component_host_names()
            .returning(|_, _, _| vec!["node1".to_string()]);
        host.expect_put_property().returning(|_, _, _, _| ());

        let mut services = ServicesDescriptor::default();
        services.push_component(ComponentDescriptor::new("STORM", STORM_UI_SERVER, &["node1"]));
        services.configurations = Configurations::new().with_site(STORM_SITE, ConfigSite::new());

        let advisor = MetronServiceAdvisor::new(host);
        let result = advisor.get_service_configuration_recommendations(
            &mut Configurations::new(),
            &serde_json::Value::Null,
            &services,
            &HostsDescriptor::default(),
        );

        assert!(matches!(
            result,
            Err(AdvisorError::MissingProperty { ref property, .. }) if property == UI_PORT
        ));
    }

    #[test]
    fn test_classpath_missing_every_path_yields_one_item() {
        let mut host = MockStackAdvisor::new();
        item_builders(&mut host);

        let advisor = MetronServiceAdvisor::new(host);
        let storm_site = ConfigSite::new()
            .with_property(TOPOLOGY_CLASSPATH, "/opt/custom/lib")
            .with_property(SUPERVISOR_SLOTS_PORTS, "6700,6701,6702,6703,6704");
        let placement = ComponentPlacement::new().with_component(SUPERVISOR, &["node1"]);

        let items = advisor.validate_storm_site_configurations(&storm_site, &placement).unwrap();

        assert_eq!(items.len(), 1);
        assert!(items[0].is_error());
        assert_eq!(items[0].config_name(), Some(TOPOLOGY_CLASSPATH));
        assert_eq!(
            items[0].message,
            "Metron requires this property to contain /etc/hbase/conf:/etc/hadoop/conf"
        );
    }

    #[test]
    fn test_configured_minimum_slots_is_honoured() {
        let mut host = MockStackAdvisor::new();
        item_builders(&mut host);

        let advisor = MetronServiceAdvisor::with_config(host, AdvisorConfig::default().with_min_storm_slots(8).unwrap());
        let storm_site = ConfigSite::new()
            .with_property(TOPOLOGY_CLASSPATH, "/etc/hbase/conf:/etc/hadoop/conf")
            .with_property(SUPERVISOR_SLOTS_PORTS, "6700,6701,6702");
        let placement = ComponentPlacement::new().with_component(SUPERVISOR, &["node1", "node2"]);

        let items = advisor.validate_storm_site_configurations(&storm_site, &placement).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].config_name(), Some(SUPERVISOR_SLOTS_PORTS));
        assert!(items[0].message.contains("provisions 6 total slots"));
    }
}
