//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("file exceeds the {limit} byte upload limit ({actual} bytes)")]
  UploadTooLarge { limit: usize, actual: usize },
  #[error("invalid file name: {0}")]
  BadFileName(String),
  #[error("media file not found")]
  NotFound,
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::UploadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
      Error::BadFileName(_) => StatusCode::BAD_REQUEST,
      Error::NotFound => StatusCode::NOT_FOUND,
      Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, self.to_string()).into_response()
  }
}
