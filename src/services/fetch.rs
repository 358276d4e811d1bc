use std::sync::Arc;

use crate::cache::{Cache, CacheKey};
use crate::cached;
use crate::error::AppResult;
use crate::models::VideoRecord;
use crate::services::providers::VideoProvider;

/// Metadata ages quickly while a creator is editing a video page,
/// so snapshots only live for fifteen minutes.
const VIDEO_CACHE_TTL: u64 = 900;

/// Fetches a video record, serving from cache when possible
///
/// Cache reads that fail are logged and treated as misses, so analysis
/// keeps working when Redis is unavailable.
pub async fn fetch_video(
    provider: &Arc<dyn VideoProvider>,
    cache: &Cache,
    video_id: &str,
) -> AppResult<VideoRecord> {
    cached!(
        cache,
        CacheKey::Video(video_id.to_string()),
        VIDEO_CACHE_TTL,
        async move { provider.fetch_video(video_id).await }
    )
}
