//! Request-level error kinds and their HTTP mapping.
//!
//! Upstream and parse failures both surface to callers as the same generic
//! 500 body; the distinction between them lives only in the logs. Topic
//! rejection is the one client error and carries the full allow-list so the
//! caller can correct itself.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use crate::protocol::ErrorOut;
use crate::util::trunc_for_log;

/// Body text shared by every 500 response.
pub const GENERIC_FAILURE: &str = "Failed to generate MCQs";

#[derive(Debug, Error)]
pub enum ApiError {
  /// Topic not in the active allow-list, after normalization and (for the
  /// kids profile) fuzzy matching.
  #[error("topic not allowed")]
  TopicRejected { allowed: &'static [&'static str] },

  /// Transport error, non-success HTTP status, or missing choice content
  /// from the completion API.
  #[error("upstream completion call failed: {0}")]
  UpstreamCallFailed(String),

  /// Model reply did not contain a parseable JSON object.
  #[error("malformed model output")]
  MalformedModelOutput { raw: String },
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::TopicRejected { allowed } => {
        let msg = format!(
          "Only English language topics are allowed. Allowed topics: {}",
          allowed.join(", ")
        );
        warn!(target: "mcq", "Rejected topic outside the allow-list");
        (StatusCode::BAD_REQUEST, Json(ErrorOut { error: msg })).into_response()
      }
      ApiError::UpstreamCallFailed(detail) => {
        error!(target: "mcq", error = %detail, "Completion call failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(ErrorOut { error: GENERIC_FAILURE.into() }),
        )
          .into_response()
      }
      ApiError::MalformedModelOutput { raw } => {
        error!(target: "mcq", raw = %trunc_for_log(&raw, 400), "Model output was not parseable JSON");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(ErrorOut { error: GENERIC_FAILURE.into() }),
        )
          .into_response()
      }
    }
  }
}
