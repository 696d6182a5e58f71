//! API error handling
//!
//! Every error renders as `{ errorIdentifier, message, missingFields? }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crm_auth::AuthError;
use crm_core::error::{CrmError, ValidationErrors};
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    NotFound { resource: &'static str, id: String },
    Validation(ValidationErrors),
    Unauthorized(String),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        ApiError::Unauthorized(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_identifier(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "not_found",
            ApiError::Validation(_) => "validation_failed",
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::BadRequest(_) => "invalid_value",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl From<CrmError> for ApiError {
    fn from(err: CrmError) -> Self {
        match err {
            CrmError::NotFound { entity, value, .. } => ApiError::NotFound {
                resource: entity,
                id: value,
            },
            CrmError::Validation(errors) => ApiError::Validation(errors),
            CrmError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error_identifier: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_fields: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_identifier = self.error_identifier();
        let (message, missing_fields) = match &self {
            ApiError::NotFound { resource, id } => {
                (format!("{} with id {} not found", resource, id), Vec::new())
            }
            ApiError::Validation(errors) => (
                errors.summary(),
                errors.missing_fields().into_iter().map(String::from).collect(),
            ),
            ApiError::Unauthorized(msg) | ApiError::BadRequest(msg) => (msg.clone(), Vec::new()),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (msg.clone(), Vec::new())
            }
        };

        let body = ErrorBody {
            error_identifier,
            message,
            missing_fields,
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
