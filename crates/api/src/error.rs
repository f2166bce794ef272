use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tradepost_core::error::CoreError;
use tradepost_core::validation::ValidationErrors;
use tradepost_db::flow::FlowError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain and flow errors. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tradepost_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A wizard step failure from `tradepost_db::flow`.
    #[error(transparent)]
    Flow(#[from] FlowError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let fields = match &self {
            AppError::Flow(FlowError::Validation(errors)) => Some(field_map(errors)),
            _ => None,
        };

        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            AppError::Flow(flow) => match flow {
                FlowError::Validation(_) => validation_failed(),
                FlowError::Core(core) => classify_core_error(core),
                FlowError::Persistence { operation, source } => {
                    tracing::error!(operation, error = %source, "Persistence failure");
                    internal_error()
                }
                FlowError::Cancelled => (StatusCode::CONFLICT, "CANCELLED", flow.to_string()),
            },
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(fields) = fields {
            body["fields"] = json!(fields);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a domain error into an HTTP status, error code, and message.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
    }
}

fn validation_failed() -> (StatusCode, &'static str, String) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        "VALIDATION_ERROR",
        "One or more fields are invalid".to_string(),
    )
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn field_map(errors: &ValidationErrors) -> BTreeMap<&'static str, &str> {
    errors
        .iter()
        .map(|e| (e.field.as_str(), e.message.as_str()))
        .collect()
}
