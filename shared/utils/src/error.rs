use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::format_validation_errors;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum MillwrightError {
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl MillwrightError {
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Database { .. } => "DATABASE_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Database { .. } => 500,
            Self::Validation { .. } => 400,
            Self::InvalidInput { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::Configuration { .. } => 500,
            Self::Internal { .. } => 500,
        }
    }
}

pub type MillwrightResult<T> = Result<T, MillwrightError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl From<MillwrightError> for ErrorResponse {
    fn from(error: MillwrightError) -> Self {
        Self {
            error: error.to_string(),
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }
}

// Conversion from common error types
impl From<sqlx::Error> for MillwrightError {
    fn from(error: sqlx::Error) -> Self {
        Self::database(error.to_string())
    }
}

impl From<serde_json::Error> for MillwrightError {
    fn from(error: serde_json::Error) -> Self {
        Self::validation("JSON", error.to_string())
    }
}

impl From<config::ConfigError> for MillwrightError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}

impl From<validator::ValidationErrors> for MillwrightError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::validation("model", format_validation_errors(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_status() {
        let error = MillwrightError::invalid_input("no valid parts found");
        assert_eq!(error.error_code(), "INVALID_INPUT");
        assert_eq!(error.http_status_code(), 400);

        let error = MillwrightError::not_found("equipment 42");
        assert_eq!(error.http_status_code(), 404);
        assert_eq!(error.to_string(), "Not found: equipment 42");

        let error = MillwrightError::database("connection refused");
        assert_eq!(error.http_status_code(), 500);
    }

    #[test]
    fn test_error_response_conversion() {
        let response: ErrorResponse =
            MillwrightError::invalid_input("no valid parts found in the input").into();
        assert_eq!(response.code, "INVALID_INPUT");
        assert!(response.message.contains("no valid parts found"));
    }
}
