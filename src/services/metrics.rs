use crate::models::{EngagementMetrics, VideoRecord};

/// Derives normalized engagement metrics from raw counts
///
/// Rates are in per-100-views units. A video with zero views carries no
/// engagement signal at all, and a hidden count leaves its own rate
/// undefined. The combined rate sums whichever interaction counts are known
/// and is undefined only when neither is; an unknown count never contributes
/// as a silent zero.
pub fn derive_metrics(record: &VideoRecord) -> EngagementMetrics {
    if record.view_count == 0 {
        return EngagementMetrics {
            like_rate: None,
            comment_rate: None,
            engagement_rate: None,
        };
    }

    let views = record.view_count as f64;

    let like_rate = record.like_count.map(|likes| likes as f64 / views * 100.0);
    let comment_rate = record
        .comment_count
        .map(|comments| comments as f64 / views * 100.0);

    let engagement_rate = match (record.like_count, record.comment_count) {
        (None, None) => None,
        (likes, comments) => {
            // Summed as f64: the two counts together can exceed u64::MAX
            let interactions = likes.unwrap_or(0) as f64 + comments.unwrap_or(0) as f64;
            Some(interactions / views * 100.0)
        }
    };

    EngagementMetrics {
        like_rate,
        comment_rate,
        engagement_rate,
    }
}
