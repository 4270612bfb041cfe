use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};

use super::bearer_token;
use crate::errors::{AppError, AppResult};
use crate::models::{AddHistoryRequest, HistoryEntry};
use crate::web::AppState;

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<Vec<HistoryEntry>>> {
    let username = state.accounts.current_user(bearer_token(&headers)?)?;
    Ok(Json(state.history.list(&username)?))
}

pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddHistoryRequest>,
) -> AppResult<(StatusCode, Json<HistoryEntry>)> {
    let username = state.accounts.current_user(bearer_token(&headers)?)?;

    let title = payload.title.trim();
    if title.is_empty() {
        return Err(AppError::validation("history title is required"));
    }

    let entry = state.history.add(&username, title, payload.note.trim())?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn clear(State(state): State<AppState>, headers: HeaderMap) -> AppResult<StatusCode> {
    let username = state.accounts.current_user(bearer_token(&headers)?)?;
    state.history.clear(&username)?;
    Ok(StatusCode::NO_CONTENT)
}
