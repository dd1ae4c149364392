use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures reading or writing the backing JSON file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unable to encode movies: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Request-level failures, rendered as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MovieError {
    #[error("Movie not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("Invalid request payload")]
    MalformedRequest,
    #[error("{0}")]
    Persistence(String),
}

impl MovieError {
    pub fn status(&self) -> StatusCode {
        match self {
            MovieError::NotFound => StatusCode::NOT_FOUND,
            MovieError::Validation(_)
            | MovieError::MalformedRequest
            | MovieError::Persistence(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for MovieError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
