//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The id does not name a stored tweet. Rendered as a bare 404 with an
  /// empty body.
  #[error("not found")]
  NotFound,

  #[error("validation error: {0}")]
  Validation(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Wrap a storage backend error.
  pub fn store<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
    ApiError::Store(Box::new(e))
  }
}

impl From<chirp_core::Error> for ApiError {
  fn from(e: chirp_core::Error) -> Self {
    match e {
      chirp_core::Error::TweetNotFound(_) => ApiError::NotFound,
      chirp_core::Error::BlankText | chirp_core::Error::TextTooLong(_) => {
        ApiError::Validation(e.to_string())
      }
      other => ApiError::Store(Box::new(other)),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match &self {
      ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
      ApiError::Validation(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Store(e) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
      )
        .into_response(),
    }
  }
}
