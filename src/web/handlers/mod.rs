//! HTTP request handlers organized by domain

pub mod auth;
pub mod favorites;
pub mod health;
pub mod history;
pub mod playback;
pub mod static_assets;
pub mod tv;

use axum::http::{header, HeaderMap};

use crate::errors::{AppResult, AuthError};

/// Pull the bearer token out of the Authorization header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> AppResult<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AuthError::MissingSession.into())
}
