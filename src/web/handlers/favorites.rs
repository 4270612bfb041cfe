use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};

use super::bearer_token;
use crate::errors::AppResult;
use crate::models::{AddFavoriteRequest, Favorite, RemoveFavoriteRequest};
use crate::web::AppState;

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<Vec<Favorite>>> {
    let username = state.accounts.current_user(bearer_token(&headers)?)?;
    Ok(Json(state.favorites.list(&username)?))
}

pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddFavoriteRequest>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    let username = state.accounts.current_user(bearer_token(&headers)?)?;
    let favorite = state
        .favorites
        .add(&username, payload.title.as_deref(), &payload.url)?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RemoveFavoriteRequest>,
) -> AppResult<StatusCode> {
    let username = state.accounts.current_user(bearer_token(&headers)?)?;
    state.favorites.remove(&username, &payload.url)?;
    Ok(StatusCode::NO_CONTENT)
}
