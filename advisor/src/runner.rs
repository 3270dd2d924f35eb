//! Dispatch of cluster manager requests to the advisor entry points

use serde_json::json;
use shared::{AdvisorAction, Configurations, HostsDescriptor, ServicesDescriptor, advisor_info};

use crate::advisor::MetronServiceAdvisor;
use crate::error::AdvisorResult;
use crate::traits::StackAdvisor;

/// Everything the cluster manager hands over for one invocation
#[derive(Debug, Clone, Default)]
pub struct AdvisorRequest {
    pub services: ServicesDescriptor,
    pub hosts: HostsDescriptor,
    /// Recommended defaults; the current configurations stand in when absent
    pub recommended_defaults: Option<Configurations>,
    pub cluster_data: serde_json::Value,
}

impl AdvisorRequest {
    pub fn new(services: ServicesDescriptor, hosts: HostsDescriptor) -> Self {
        Self {
            services,
            hosts,
            recommended_defaults: None,
            cluster_data: serde_json::Value::Null,
        }
    }

    pub fn with_recommended_defaults(mut self, defaults: Configurations) -> Self {
        self.recommended_defaults = Some(defaults);
        self
    }

    fn recommended_defaults(&self) -> &Configurations {
        self.recommended_defaults
            .as_ref()
            .unwrap_or(&self.services.configurations)
    }
}

impl<H> MetronServiceAdvisor<H>
where
    H: StackAdvisor,
{
    /// Run one action and build the response document
    ///
    /// Validations answer `{"items": [...]}`; recommendations answer with the
    /// updated configurations under `recommendations.blueprint.configurations`.
    pub fn run_action(&self, action: AdvisorAction, request: &AdvisorRequest) -> AdvisorResult<serde_json::Value> {
        let response = match action {
            AdvisorAction::ValidateComponentLayout => {
                let items = self.get_service_component_layout_validations(&request.services, &request.hosts)?;
                json!({ "items": items })
            }
            AdvisorAction::ValidateConfigurations => {
                let items = self.get_service_configurations_validation_items(
                    &request.services.configurations,
                    request.recommended_defaults(),
                    &request.services,
                    &request.hosts,
                )?;
                json!({ "items": items })
            }
            AdvisorAction::RecommendConfigurations => {
                let mut configurations = request.services.configurations.clone();
                self.get_service_configuration_recommendations(
                    &mut configurations,
                    &request.cluster_data,
                    &request.services,
                    &request.hosts,
                )?;
                json!({
                    "recommendations": {
                        "blueprint": { "configurations": configurations }
                    }
                })
            }
        };

        advisor_info!(action, "Completed for {} hosts", request.hosts.items.len());
        Ok(response)
    }
}
