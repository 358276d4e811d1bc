use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{AnalysisResult, VideoRecord};
use crate::routes::AppState;
use crate::services;
use crate::services::fetch;
use crate::services::providers::extract_video_id;

#[derive(Debug, Deserialize)]
pub struct AnalysisParams {
    video: String,
}

/// Handler for analyzing a caller-supplied video record
///
/// Takes the full record in the request body, so callers with their own
/// metadata source can score videos without going through YouTube.
pub async fn analyze_record(
    State(state): State<Arc<AppState>>,
    Json(record): Json<VideoRecord>,
) -> AppResult<Json<AnalysisResult>> {
    let result = services::analyze(&record, &state.engine)?;
    Ok(Json(result))
}

/// Handler for analyzing a video given its URL or bare ID
pub async fn analyze_by_reference(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalysisParams>,
) -> AppResult<Json<AnalysisResult>> {
    let video_id = extract_video_id(&params.video).ok_or_else(|| {
        AppError::InvalidInput(format!("Unrecognized video URL or id: {}", params.video))
    })?;

    let record = fetch::fetch_video(&state.provider, &state.cache, &video_id).await?;
    let result = services::analyze(&record, &state.engine)?;

    tracing::info!(
        video_id = %video_id,
        optimization_score = result.optimization_score,
        recommendations = result.recommendations.len(),
        "Video analyzed"
    );

    Ok(Json(result))
}
