//! Request and response files exchanged with the cluster manager
//!
//! The cluster manager drops `hosts.json` and `services.json` into a working
//! directory, invokes the advisor with an action, and reads the JSON answer
//! back from stdout or an output file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use shared::{AdvisorAction, Configurations, HostsDescriptor, ServicesDescriptor, advisor_debug};

use crate::error::{AdvisorError, AdvisorResult};
use crate::runner::AdvisorRequest;

/// Locations of the request documents for one advisor run
#[derive(Debug, Clone)]
pub struct RequestFiles {
    hosts_path: PathBuf,
    services_path: PathBuf,
    recommendations_path: Option<PathBuf>,
}

impl RequestFiles {
    pub fn new(hosts_path: impl Into<PathBuf>, services_path: impl Into<PathBuf>) -> Self {
        Self {
            hosts_path: hosts_path.into(),
            services_path: services_path.into(),
            recommendations_path: None,
        }
    }

    /// Use a separate recommended-defaults document for configuration validation
    pub fn with_recommendations(mut self, path: impl Into<PathBuf>) -> Self {
        self.recommendations_path = Some(path.into());
        self
    }

    /// Read and parse every request document
    pub fn load(&self, action: AdvisorAction) -> AdvisorResult<AdvisorRequest> {
        let hosts = HostsDescriptor::from_json_str(&read_file(&self.hosts_path)?)?;
        let services = ServicesDescriptor::from_json_str(&read_file(&self.services_path)?)?;

        let recommended_defaults = match &self.recommendations_path {
            Some(path) => Some(parse_recommendations(&read_file(path)?)?),
            None => None,
        };

        advisor_debug!(
            action,
            "Loaded {} hosts and {} services from {}",
            hosts.items.len(),
            services.services.len(),
            self.services_path.display()
        );

        Ok(AdvisorRequest {
            services,
            hosts,
            recommended_defaults,
            cluster_data: serde_json::Value::Null,
        })
    }
}

/// Accept either a bare configurations map or a full recommendations response
fn parse_recommendations(input: &str) -> AdvisorResult<Configurations> {
    let document: serde_json::Value = serde_json::from_str(input)?;
    let configurations = document
        .pointer("/recommendations/blueprint/configurations")
        .cloned()
        .unwrap_or(document);
    Ok(serde_json::from_value(configurations)?)
}

fn read_file(path: &Path) -> AdvisorResult<String> {
    fs::read_to_string(path).map_err(|_| AdvisorError::FileSystemError {
        operation: "read".to_string(),
        path: path.display().to_string(),
    })
}

/// Write a response document to a file, or to stdout when no path is given
pub fn write_response(output: Option<&Path>, response: &serde_json::Value) -> AdvisorResult<()> {
    let content = serde_json::to_string_pretty(response)?;
    match output {
        Some(path) => fs::write(path, content).map_err(|_| AdvisorError::FileSystemError {
            operation: "write".to_string(),
            path: path.display().to_string(),
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{content}")?;
            Ok(())
        }
    }
}
