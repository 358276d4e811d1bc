use crate::error::AppResult;
use crate::models::VideoRecord;

pub mod youtube;

pub use youtube::YouTubeProvider;

/// Video metadata provider abstraction
///
/// The analysis pipeline only ever sees a `VideoRecord`; where it came from
/// is the provider's business. Implementations must map "no such video" to
/// `AppError::NotFound` and upstream failures to `AppError::ExternalApi`.
#[async_trait::async_trait]
pub trait VideoProvider: Send + Sync {
    /// Fetch metadata and statistics for a single video by ID
    async fn fetch_video(&self, video_id: &str) -> AppResult<VideoRecord>;

    /// Provider name for logs
    fn name(&self) -> &'static str;
}

/// URL prefixes a video reference may arrive under
const ID_PREFIXES: [&str; 4] = [
    "youtube.com/watch?v=",
    "youtu.be/",
    "youtube.com/embed/",
    "youtube.com/v/",
];

const VIDEO_ID_LEN: usize = 11;

/// Extracts a video ID from the common URL formats, or accepts a bare ID
///
/// The ID value ends at the first `&`, `?`, `#` or `/`. Bare input must look
/// like a video ID: exactly 11 characters of `[A-Za-z0-9_-]`.
pub fn extract_video_id(input: &str) -> Option<String> {
    let trimmed = input.trim();

    for prefix in ID_PREFIXES {
        if let Some(pos) = trimmed.find(prefix) {
            let candidate: String = trimmed[pos + prefix.len()..]
                .chars()
                .take_while(|c| !matches!(c, '&' | '?' | '#' | '/'))
                .collect();
            if !candidate.is_empty() {
                return Some(candidate);
            }
        }
    }

    if trimmed.len() == VIDEO_ID_LEN && trimmed.chars().all(is_id_char) {
        return Some(trimmed.to_string());
    }

    None
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
