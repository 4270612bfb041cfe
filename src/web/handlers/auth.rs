use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};

use super::bearer_token;
use crate::errors::AppResult;
use crate::models::{CredentialsRequest, SessionResponse, SessionUser};
use crate::web::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    let username = payload.username.trim().to_string();
    let token = state.accounts.register(&username, &payload.password)?;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse { token, username }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> AppResult<Json<SessionResponse>> {
    let username = payload.username.trim().to_string();
    let token = state.accounts.login(&username, &payload.password)?;
    Ok(Json(SessionResponse { token, username }))
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> AppResult<StatusCode> {
    let token = bearer_token(&headers)?;
    state.accounts.logout(token)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<SessionUser>> {
    let username = state.accounts.current_user(bearer_token(&headers)?)?;
    Ok(Json(SessionUser { username }))
}
