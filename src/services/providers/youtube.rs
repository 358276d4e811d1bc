use reqwest::Client as HttpClient;

use crate::error::{AppError, AppResult};
use crate::models::{ApiVideoItem, ApiVideoListResponse, VideoRecord};
use crate::services::providers::VideoProvider;

/// YouTube Data API v3 provider
///
/// Fetches snippet, statistics and contentDetails for a single video using
/// API-key auth. Counts arrive as JSON strings and are simply absent when a
/// creator hides them; both quirks are normalized here so the rest of the
/// system never sees them.
#[derive(Clone)]
pub struct YouTubeProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl YouTubeProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Converts one API item into a domain record
    fn to_record(&self, item: ApiVideoItem) -> AppResult<VideoRecord> {
        let stats = item.statistics.unwrap_or_default();

        let view_count = stats
            .view_count
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0);
        let like_count = stats.like_count.as_deref().and_then(|raw| raw.parse().ok());
        let comment_count = stats
            .comment_count
            .as_deref()
            .and_then(|raw| raw.parse().ok());

        let duration_iso = item
            .content_details
            .as_ref()
            .and_then(|details| details.duration.as_deref());
        let duration_seconds = match duration_iso {
            Some(iso) => parse_iso8601_duration(iso).ok_or_else(|| {
                AppError::ExternalApi(format!("Unparsable video duration: {}", iso))
            })?,
            None => 0,
        };

        let snippet = item.snippet;
        let category = snippet
            .category_id
            .as_deref()
            .and_then(category_label)
            .map(String::from);

        Ok(VideoRecord {
            id: item.id,
            title: snippet.title,
            description: snippet.description,
            channel_title: snippet.channel_title,
            published_at: snippet.published_at,
            duration_seconds,
            view_count,
            like_count,
            comment_count,
            tags: snippet.tags,
            category,
            thumbnail_url: snippet.thumbnails.best_url(),
        })
    }
}

#[async_trait::async_trait]
impl VideoProvider for YouTubeProvider {
    async fn fetch_video(&self, video_id: &str) -> AppResult<VideoRecord> {
        if video_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "video id cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/videos", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("part", "snippet,statistics,contentDetails"),
                ("id", video_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "YouTube API returned status {}: {}",
                status, body
            )));
        }

        let list: ApiVideoListResponse = response.json().await?;
        let item = list
            .items
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video_id)))?;

        let record = self.to_record(item)?;

        tracing::info!(
            video_id = %record.id,
            views = record.view_count,
            duration = record.duration_seconds,
            provider = self.name(),
            "Video fetched"
        );

        Ok(record)
    }

    fn name(&self) -> &'static str {
        "youtube"
    }
}

/// Parses the API's ISO-8601 duration form (`PT#H#M#S`) into seconds
pub fn parse_iso8601_duration(value: &str) -> Option<u32> {
    let rest = value.strip_prefix("PT")?;
    if rest.is_empty() {
        return None;
    }

    let mut seconds: u32 = 0;
    let mut digits = String::new();

    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else {
            let count: u32 = digits.parse().ok()?;
            digits.clear();

            let unit_seconds = match c {
                'H' => 3_600,
                'M' => 60,
                'S' => 1,
                _ => return None,
            };
            seconds = seconds.checked_add(count.checked_mul(unit_seconds)?)?;
        }
    }

    // Trailing digits without a unit letter are malformed
    if digits.is_empty() {
        Some(seconds)
    } else {
        None
    }
}

/// Maps the API's numeric category ID to its label
pub fn category_label(category_id: &str) -> Option<&'static str> {
    match category_id {
        "1" => Some("Film & Animation"),
        "2" => Some("Autos & Vehicles"),
        "10" => Some("Music"),
        "15" => Some("Pets & Animals"),
        "17" => Some("Sports"),
        "19" => Some("Travel & Events"),
        "20" => Some("Gaming"),
        "22" => Some("People & Blogs"),
        "23" => Some("Comedy"),
        "24" => Some("Entertainment"),
        "25" => Some("News & Politics"),
        "26" => Some("Howto & Style"),
        "27" => Some("Education"),
        "28" => Some("Science & Technology"),
        _ => None,
    }
}
