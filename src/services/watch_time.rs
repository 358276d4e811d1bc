use crate::config::EngineConfig;
use crate::models::{RetentionEstimate, WatchTimeSummary};

use super::retention::MAX_RETENTION;

/// Projects current and potential total watch time
///
/// Current watch time is views x estimated retention x duration. The
/// potential figure applies the configured uplift on top of the estimated
/// fraction, capped at the same ceiling the estimator uses, so the
/// improvement is never negative.
pub fn project_watch_time(
    view_count: u64,
    retention: &RetentionEstimate,
    duration_seconds: u32,
    config: &EngineConfig,
) -> WatchTimeSummary {
    let views = view_count as f64;
    let duration = duration_seconds as f64;

    let current_seconds = views * retention.fraction * duration;

    let potential_fraction = (retention.fraction + config.uplift_fraction).min(MAX_RETENTION);
    let potential_seconds = views * potential_fraction * duration;

    WatchTimeSummary {
        current_seconds,
        potential_seconds,
        improvement_seconds: potential_seconds - current_seconds,
    }
}
