//! API Error Responses

use axum::{
    extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse,
    response::Response, Json,
};
use knowledge_base::SymptomError;
use rule_engine::EngineError;
use serde::Serialize;
use thiserror::Error;

/// Errors returned to intake clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body was not JSON or did not fit the request shape
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
    /// Symptom map missing a key or naming an unknown one
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub detail: String,
}

impl ApiError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidBody(_) => "invalid_body",
            ApiError::Engine(EngineError::InvalidSymptoms(SymptomError::MissingSymptomKey(_))) => {
                "missing_symptom_key"
            }
            ApiError::Engine(EngineError::InvalidSymptoms(SymptomError::UnknownSymptomKey(_))) => {
                "unknown_symptom_key"
            }
            ApiError::Engine(EngineError::UnknownUrgency(_)) => "unknown_urgency",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::Engine(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.code(),
            detail: match &self {
                ApiError::InvalidBody(rejection) => rejection.body_text(),
                ApiError::Engine(e) => e.to_string(),
            },
        };
        (self.status(), Json(body)).into_response()
    }
}
