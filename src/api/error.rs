use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ApiResponse;
use crate::constants::api::GENERIC_ERROR_MESSAGE;
use crate::services::LookupError;

#[derive(Debug)]
pub enum ApiError {
    DatabaseError(String),

    ExternalApiError { service: String, message: String },

    EmptyResult { service: String },

    ValidationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ApiError::ExternalApiError { service, message } => {
                write!(f, "{} error: {}", service, message)
            }
            ApiError::EmptyResult { service } => write!(f, "{} returned no results", service),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Lookup failures all look the same to the caller.
        let (status, error_message) = match &self {
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE.to_string())
            }
            ApiError::ExternalApiError { service, message } => {
                tracing::warn!("{} API error: {}", service, message);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE.to_string())
            }
            ApiError::EmptyResult { service } => {
                tracing::warn!("{} returned an empty result", service);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE.to_string())
            }
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = ApiResponse::<()>::error(error_message);
        (status, Json(body)).into_response()
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::Provider { service, message } => {
                ApiError::ExternalApiError { service, message }
            }
            LookupError::EmptyResult { service } => ApiError::EmptyResult { service },
            LookupError::Store(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::ValidationError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_failures_are_server_errors() {
        let cases = [
            LookupError::Provider {
                service: "Yelp".into(),
                message: "503".into(),
            },
            LookupError::EmptyResult {
                service: "Dark Sky".into(),
            },
            LookupError::Store("locked".into()),
        ];
        for err in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn validation_is_client_error() {
        let response = ApiError::validation("bad").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
