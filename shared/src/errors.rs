//! Shared error types for the service advisor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Unknown advisor action: {input}")]
    UnknownAction { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
