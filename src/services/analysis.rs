use crate::config::EngineConfig;
use crate::error::{AppError, AppResult};
use crate::models::{AnalysisResult, VideoRecord};

use super::metrics::derive_metrics;
use super::recommendation::{recommend, RuleContext};
use super::retention::estimate_retention;
use super::scoring::score_video;
use super::watch_time::project_watch_time;

/// Runs the full scoring pipeline over one video record
///
/// A malformed record (blank id, zero duration) is the only aborting
/// condition. Absent signals flow through as sentinels and still produce a
/// complete result. Pure and deterministic: identical records yield
/// identical results.
pub fn analyze(record: &VideoRecord, config: &EngineConfig) -> AppResult<AnalysisResult> {
    validate(record)?;

    let metrics = derive_metrics(record);
    let retention = estimate_retention(record.duration_seconds, &metrics, config);
    let watch_time = project_watch_time(
        record.view_count,
        &retention,
        record.duration_seconds,
        config,
    );
    let score = score_video(record, &metrics, &retention, config);
    let recommendations = recommend(&RuleContext {
        record,
        metrics: &metrics,
        retention: &retention,
        score: &score,
    });

    tracing::debug!(
        video_id = %record.id,
        bucket = %retention.bucket,
        overall = score.overall,
        recommendations = recommendations.len(),
        "Video analysis completed"
    );

    Ok(AnalysisResult {
        video_id: record.id.clone(),
        optimization_score: score.rounded(),
        metrics,
        retention,
        watch_time,
        score,
        recommendations,
    })
}

fn validate(record: &VideoRecord) -> AppResult<()> {
    if record.id.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "video id cannot be empty".to_string(),
        ));
    }
    if record.duration_seconds == 0 {
        return Err(AppError::InvalidInput(
            "video duration must be positive".to_string(),
        ));
    }
    Ok(())
}
