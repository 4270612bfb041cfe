use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::{AppResult, PlaylistError};
use crate::models::Channel;
use crate::web::AppState;

/// List all channels of one configured playlist.
///
/// The id is a position in the configured source list. Anything that does
/// not parse as a non-negative integer gets the same answer as an
/// out-of-range index.
pub async fn list_channels(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Channel>>> {
    let index: usize = id
        .parse()
        .map_err(|_| PlaylistError::unknown(id.as_str()))?;

    let channels = state.fetcher.fetch(index).await?;
    Ok(Json(channels))
}
