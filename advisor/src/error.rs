//! Advisor-specific error types
//!
//! Validation findings are not errors; these cover requests the advisor
//! cannot evaluate at all.

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Component {component} has no hosts assigned")]
    MissingComponent { component: String },

    #[error("Property {property} is missing from {site}")]
    MissingProperty { site: String, property: String },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("File system operation failed: {operation} on {path}")]
    FileSystemError { operation: String, path: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl AdvisorError {
    pub fn missing_component(component: &str) -> Self {
        AdvisorError::MissingComponent {
            component: component.to_string(),
        }
    }

    pub fn missing_property(site: &str, property: &str) -> Self {
        AdvisorError::MissingProperty {
            site: site.to_string(),
            property: property.to_string(),
        }
    }

    pub fn config(field: impl Into<String>) -> Self {
        AdvisorError::ConfigurationError { field: field.into() }
    }
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
