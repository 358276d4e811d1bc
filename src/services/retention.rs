use crate::config::EngineConfig;
use crate::models::{DurationBucket, EngagementMetrics, RetentionEstimate};

/// Baseline retention fraction per duration bucket. Shorter videos retain a
/// larger fraction of their runtime.
const SHORT_BASELINE: f64 = 0.60;
const MEDIUM_BASELINE: f64 = 0.45;
const LONG_BASELINE: f64 = 0.30;

/// Retention bonus per engagement-rate point, and its cap. Engagement is the
/// only proxy signal available for retention quality.
const BONUS_PER_RATE_POINT: f64 = 0.015;
const BONUS_CAP: f64 = 0.35;

/// A heuristic never claims 0% or 100% retention.
pub const MIN_RETENTION: f64 = 0.05;
pub const MAX_RETENTION: f64 = 0.95;

/// Picks the duration bucket used by the retention heuristic
pub fn duration_bucket(duration_seconds: u32, config: &EngineConfig) -> DurationBucket {
    if duration_seconds < config.short_max_seconds {
        DurationBucket::Short
    } else if duration_seconds <= config.medium_max_seconds {
        DurationBucket::Medium
    } else {
        DurationBucket::Long
    }
}

/// Estimates the average fraction of the video watched
///
/// Starts from the bucket baseline and adds a capped engagement bonus. An
/// undefined engagement rate leaves the baseline untouched; it is missing
/// data, not evidence of poor retention.
pub fn estimate_retention(
    duration_seconds: u32,
    metrics: &EngagementMetrics,
    config: &EngineConfig,
) -> RetentionEstimate {
    let bucket = duration_bucket(duration_seconds, config);

    let baseline = match bucket {
        DurationBucket::Short => SHORT_BASELINE,
        DurationBucket::Medium => MEDIUM_BASELINE,
        DurationBucket::Long => LONG_BASELINE,
    };

    let bonus = match metrics.engagement_rate {
        Some(rate) => (rate * BONUS_PER_RATE_POINT).min(BONUS_CAP),
        None => 0.0,
    };

    let fraction = (baseline + bonus).clamp(MIN_RETENTION, MAX_RETENTION);

    RetentionEstimate { fraction, bucket }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(engagement_rate: Option<f64>) -> EngagementMetrics {
        EngagementMetrics {
            like_rate: None,
            comment_rate: None,
            engagement_rate,
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        let config = EngineConfig::default();

        assert_eq!(duration_bucket(0, &config), DurationBucket::Short);
        assert_eq!(duration_bucket(239, &config), DurationBucket::Short);
        assert_eq!(duration_bucket(240, &config), DurationBucket::Medium);
        assert_eq!(duration_bucket(1200, &config), DurationBucket::Medium);
        assert_eq!(duration_bucket(1201, &config), DurationBucket::Long);
    }

    #[test]
    fn test_bucket_respects_configured_bounds() {
        let config = EngineConfig {
            short_max_seconds: 60,
            medium_max_seconds: 300,
            ..EngineConfig::default()
        };

        assert_eq!(duration_bucket(59, &config), DurationBucket::Short);
        assert_eq!(duration_bucket(300, &config), DurationBucket::Medium);
        assert_eq!(duration_bucket(301, &config), DurationBucket::Long);
    }

    #[test]
    fn test_medium_video_with_moderate_engagement() {
        let config = EngineConfig::default();
        let estimate = estimate_retention(600, &metrics(Some(5.2)), &config);

        assert_eq!(estimate.bucket, DurationBucket::Medium);
        // 0.45 baseline + 5.2 * 0.015 bonus
        assert!((estimate.fraction - 0.528).abs() < 1e-9);
    }

    #[test]
    fn test_undefined_engagement_uses_bare_baseline() {
        let config = EngineConfig::default();

        let short = estimate_retention(100, &metrics(None), &config);
        assert_eq!(short.fraction, 0.60);

        let medium = estimate_retention(600, &metrics(None), &config);
        assert_eq!(medium.fraction, 0.45);

        let long = estimate_retention(2_000, &metrics(None), &config);
        assert_eq!(long.fraction, 0.30);
    }

    #[test]
    fn test_bonus_is_capped() {
        let config = EngineConfig::default();

        // An extreme rate caps at +0.35; short baseline 0.60 lands on 0.95
        let exhaustion = estimate_retention(100, &metrics(Some(500.0)), &config);
        assert_eq!(exhaustion.fraction, MAX_RETENTION);

        let long = estimate_retention(2_000, &metrics(Some(500.0)), &config);
        assert!((long.fraction - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_fraction_stays_within_heuristic_bounds() {
        let config = EngineConfig::default();

        for duration in [10, 240, 600, 1_500, 10_000] {
            for rate in [None, Some(0.0), Some(1.0), Some(50.0), Some(10_000.0)] {
                let estimate = estimate_retention(duration, &metrics(rate), &config);
                assert!(estimate.fraction >= MIN_RETENTION);
                assert!(estimate.fraction <= MAX_RETENTION);
            }
        }
    }

    #[test]
    fn test_measured_zero_engagement_matches_baseline() {
        let config = EngineConfig::default();
        let estimate = estimate_retention(600, &metrics(Some(0.0)), &config);

        assert_eq!(estimate.fraction, MEDIUM_BASELINE);
    }
}
