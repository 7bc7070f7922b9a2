//! Shared error types for the consulting site

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Unknown city: {input}")]
    InvalidCity { input: String },

    #[error("Priority out of range [0.0, 1.0]: {input}")]
    InvalidPriority { input: String },

    #[error("Unknown change frequency: {input}")]
    InvalidChangeFrequency { input: String },

    #[error("Unknown loading indicator variant: {input}")]
    InvalidLoadingVariant { input: String },
}

impl SharedError {
    pub fn config(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            value: value.into(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
