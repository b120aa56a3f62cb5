//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use flowlab_core::error::DomainError;
use serde_json::json;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An error returned by an API handler.
///
/// Rendered as `{"detail": "<message>"}` with a matching status code.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  NotFound(String),

  #[error("{0}")]
  Conflict(String),

  #[error("{0}")]
  Internal(String),

  #[error("store error: {0}")]
  Store(#[source] BoxError),

  #[error("artifact error: {0}")]
  Artifact(#[source] BoxError),
}

impl ApiError {
  /// Map a store failure onto the HTTP taxonomy: domain errors become 404 or
  /// 409, anything else is a 500.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + DomainError + Send + Sync + 'static,
  {
    use flowlab_core::Error as Domain;

    let mapped = match e.domain() {
      Some(Domain::ExperimentNotFound(_)) => {
        Some(ApiError::NotFound("Experiment not found".to_owned()))
      }
      Some(dup @ Domain::DuplicateName(_)) => Some(ApiError::Conflict(dup.to_string())),
      None => None,
    };
    mapped.unwrap_or_else(|| ApiError::Store(Box::new(e)))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Internal(_) | ApiError::Store(_) | ApiError::Artifact(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    };
    if status.is_server_error() {
      tracing::warn!(error = %self, "request failed");
    }
    (status, Json(json!({ "detail": self.to_string() }))).into_response()
  }
}
