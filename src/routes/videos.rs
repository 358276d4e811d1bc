use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::AppResult;
use crate::models::VideoRecord;
use crate::routes::AppState;
use crate::services::fetch;

/// Video metadata response with a human-readable duration alongside the
/// raw seconds
#[derive(Debug, Serialize)]
pub struct VideoResponse {
    #[serde(flatten)]
    pub record: VideoRecord,
    pub duration_display: String,
}

/// Handler for fetching normalized video metadata
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<VideoResponse>> {
    let record = fetch::fetch_video(&state.provider, &state.cache, &id).await?;
    let duration_display = record.duration_display();

    Ok(Json(VideoResponse {
        record,
        duration_display,
    }))
}
