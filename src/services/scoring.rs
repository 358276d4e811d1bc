use crate::config::EngineConfig;
use crate::models::{
    DurationBucket, EngagementMetrics, RetentionEstimate, ScoreBreakdown, VideoRecord,
};

use super::retention::{duration_bucket, MAX_RETENTION, MIN_RETENTION};

/// Engagement rate (per 100 views) at which the sub-score reaches 50
const ENGAGEMENT_HALF_SCORE_RATE: f64 = 2.5;
/// Sub-score assumed when the engagement signal is absent. Uncertainty, not
/// proven-poor performance, so it sits above zero.
const UNDEFINED_ENGAGEMENT_SCORE: f64 = 20.0;

/// Metadata completeness signals, 25 points each
pub(crate) const MIN_DESCRIPTION_LEN: usize = 100;
pub(crate) const MIN_TAG_COUNT: usize = 3;

/// Duration sweet spot (seconds); historically the best
/// completion-to-watch-time trade-off
const SWEET_SPOT_MIN: u32 = 480;
const SWEET_SPOT_MAX: u32 = 900;
/// Extremes get penalized harder
const VERY_SHORT_SECONDS: u32 = 120;
const VERY_LONG_SECONDS: u32 = 1_800;

/// Combines the weighted sub-scores into one 0-100 breakdown
///
/// Every sub-score map is non-decreasing in its input and the weights are
/// non-negative, so the overall score is monotonic in each sub-score. The
/// unrounded overall is kept for rule evaluation; rounding happens once at
/// presentation.
pub fn score_video(
    record: &VideoRecord,
    metrics: &EngagementMetrics,
    retention: &RetentionEstimate,
    config: &EngineConfig,
) -> ScoreBreakdown {
    let engagement = engagement_score(metrics);
    let retention_score = retention_score(retention);
    let metadata = metadata_score(record);
    let duration_fit = duration_fit_score(record.duration_seconds, config);

    let overall = (config.engagement_weight * engagement
        + config.retention_weight * retention_score
        + config.metadata_weight * metadata
        + config.duration_weight * duration_fit)
        .clamp(0.0, 100.0);

    ScoreBreakdown {
        engagement,
        retention: retention_score,
        metadata,
        duration_fit,
        overall,
    }
}

/// Saturating curve with diminishing returns: 0 at rate 0, 50 at the
/// half-score rate, approaching 100 from below
fn engagement_score(metrics: &EngagementMetrics) -> f64 {
    match metrics.engagement_rate {
        Some(rate) => 100.0 * rate / (rate + ENGAGEMENT_HALF_SCORE_RATE),
        None => UNDEFINED_ENGAGEMENT_SCORE,
    }
}

/// Linear map of the estimated fraction from its heuristic bounds to [0, 100]
fn retention_score(retention: &RetentionEstimate) -> f64 {
    (retention.fraction - MIN_RETENTION) / (MAX_RETENTION - MIN_RETENTION) * 100.0
}

fn metadata_score(record: &VideoRecord) -> f64 {
    let signals = [
        record.description.len() >= MIN_DESCRIPTION_LEN,
        record.tags.len() >= MIN_TAG_COUNT,
        record.category.is_some(),
        record.thumbnail_url.is_some(),
    ];

    signals.iter().filter(|present| **present).count() as f64 * 25.0
}

fn duration_fit_score(duration_seconds: u32, config: &EngineConfig) -> f64 {
    match duration_bucket(duration_seconds, config) {
        DurationBucket::Medium => {
            if (SWEET_SPOT_MIN..=SWEET_SPOT_MAX).contains(&duration_seconds) {
                100.0
            } else {
                75.0
            }
        }
        DurationBucket::Short => {
            if duration_seconds < VERY_SHORT_SECONDS {
                25.0
            } else {
                40.0
            }
        }
        DurationBucket::Long => {
            if duration_seconds > VERY_LONG_SECONDS {
                25.0
            } else {
                40.0
            }
        }
    }
}
