//! HTTP error responses
//!
//! Maps the application error hierarchy onto status codes and the JSON
//! error body shared by every failing endpoint, so handlers can simply
//! return `AppResult<...>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::errors::{AppError, AuthError, PlaylistError};

/// JSON body of every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Playlist(PlaylistError::UnknownPlaylist { id }) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: format!("unknown playlist: {}", id),
                    details: None,
                },
            ),
            AppError::Playlist(err @ PlaylistError::UpstreamFetch { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "failed to parse playlist".to_string(),
                    details: Some(err.to_string()),
                },
            ),
            AppError::Auth(AuthError::UsernameTaken { username }) => (
                StatusCode::CONFLICT,
                ErrorBody {
                    error: format!("username already taken: {}", username),
                    details: None,
                },
            ),
            AppError::Auth(err) => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    error: err.to_string(),
                    details: None,
                },
            ),
            AppError::Validation { message } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message.clone(),
                    details: None,
                },
            ),
            AppError::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: format!("{} not found: {}", resource, id),
                    details: None,
                },
            ),
            AppError::Store(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "storage failure".to_string(),
                    details: Some(err.to_string()),
                },
            ),
            AppError::Configuration { message } | AppError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: message.clone(),
                    details: None,
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, Json(body)).into_response()
    }
}
