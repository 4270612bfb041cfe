use axum::Json;

use crate::playback::{
    select_strategy, PlaybackPlanRequest, PlaybackPlanResponse, PlayerCapabilities,
};

pub async fn plan(Json(payload): Json<PlaybackPlanRequest>) -> Json<PlaybackPlanResponse> {
    let strategy = select_strategy(PlayerCapabilities {
        native_hls: payload.native_hls,
        media_source: payload.media_source,
    });

    Json(PlaybackPlanResponse {
        strategy,
        url: payload.url,
    })
}
