//! Application error types and handling

use crate::lead::{LeadError, SubmissionError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<LeadError> for AppError {
    fn from(err: LeadError) -> Self {
        match err {
            LeadError::Validation { message, fields } => AppError::Validation {
                message,
                fields: fields.errors,
            },
            LeadError::Submission(err) => AppError::Submission(err),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Submission(_) => StatusCode::BAD_GATEWAY,
            AppError::Configuration(_) | AppError::IoError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (error_message, fields) = match self {
            AppError::NotFound(msg) => (msg, None),
            AppError::Validation { message, fields } => (message, Some(fields)),
            AppError::Submission(err) => (err.message().to_string(), None),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                ("Service is not configured".to_string(), None)
            }
            AppError::IoError(err) => {
                tracing::error!("IO error: {:?}", err);
                ("Internal server error".to_string(), None)
            }
        };

        let mut body = json!({
            "success": false,
            "error": error_message,
            "status": status.as_u16(),
        });
        if let Some(fields) = fields {
            body["fields"] = json!(fields);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationResult;

    #[test]
    fn test_lead_errors_map_to_status() {
        let mut fields = ValidationResult::success();
        fields.add_error("name", "Name is required");
        let err: AppError = LeadError::Validation {
            message: "Name and contact are required.".to_string(),
            fields,
        }
        .into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "Name and contact are required.");

        let err: AppError = LeadError::Submission(SubmissionError::Rejected {
            status: 409,
            message: "duplicate".to_string(),
        })
        .into();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "duplicate");
    }

    #[test]
    fn test_configuration_error_hides_details() {
        let response = AppError::Configuration("missing base url".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
