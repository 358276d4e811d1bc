use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Raw metadata and statistics for a single video, as supplied by a provider
///
/// Counts the platform hides (creators can disable like and comment counts)
/// are `None`, never zero; downstream metrics must keep "no data" distinct
/// from "measured zero". Only `id` and `duration_seconds` are required on
/// input; everything else degrades to an absent-signal default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Parsed video length in seconds
    pub duration_seconds: u32,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub comment_count: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Category label (e.g. "Education"), when the platform category is known
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl VideoRecord {
    /// Formats the duration as `M:SS` or `H:MM:SS`
    pub fn duration_display(&self) -> String {
        let hours = self.duration_seconds / 3600;
        let minutes = (self.duration_seconds % 3600) / 60;
        let seconds = self.duration_seconds % 60;

        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{}:{:02}", minutes, seconds)
        }
    }
}

/// Normalized engagement figures in per-100-views units
///
/// `None` is the undefined sentinel: either the video has zero views or the
/// underlying count is hidden. Undefined is not zero; a rate of 0.0 means
/// measured-and-absent engagement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngagementMetrics {
    pub like_rate: Option<f64>,
    pub comment_rate: Option<f64>,
    /// Combined (likes + comments) / views × 100 over the known counts
    pub engagement_rate: Option<f64>,
}

/// Duration bucket used to pick the retention heuristic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DurationBucket {
    Short,
    Medium,
    Long,
}

impl Display for DurationBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationBucket::Short => write!(f, "short"),
            DurationBucket::Medium => write!(f, "medium"),
            DurationBucket::Long => write!(f, "long"),
        }
    }
}

/// Heuristic estimate of the average fraction of the video watched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetentionEstimate {
    /// Estimated fraction in [0.05, 0.95]
    pub fraction: f64,
    pub bucket: DurationBucket,
}

/// Current and potential total watch time for one video
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchTimeSummary {
    pub current_seconds: f64,
    pub potential_seconds: f64,
    /// potential − current; never negative
    pub improvement_seconds: f64,
}

/// Weighted sub-scores, each in [0, 100]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub engagement: f64,
    pub retention: f64,
    pub metadata: f64,
    pub duration_fit: f64,
    /// Weighted sum, clamped to [0, 100], kept unrounded for rule evaluation
    pub overall: f64,
}

impl ScoreBreakdown {
    /// Presentation form of the overall score
    pub fn rounded(&self) -> u8 {
        self.overall.round() as u8
    }
}

/// The five recommendation categories, in presentation order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    ContentStrategy,
    Technical,
    EngagementTactics,
    Competitive,
    PostingStrategy,
}

/// Priority tier of a recommendation
///
/// Variant order is output order; the recommendation engine sorts by it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    /// Acute score deficit, fix first
    Immediate,
    /// Production-quality advice
    Technical,
    /// Category-level strategy not tied to an acute deficit
    Strategic,
}

/// Records which condition made a rule fire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleTrigger {
    /// A metric crossed a numeric threshold
    Threshold {
        metric: String,
        observed: f64,
        threshold: f64,
    },
    /// A signal was absent (undefined sentinel), not measured low
    MissingSignal { metric: String },
    /// A non-numeric attribute matched (e.g. a category label)
    Attribute { metric: String, value: String },
}

/// A single actionable recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub priority: PriorityTier,
    pub message: String,
    pub trigger: RuleTrigger,
}

/// Complete analysis output for one video
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub video_id: String,
    pub metrics: EngagementMetrics,
    pub retention: RetentionEstimate,
    pub watch_time: WatchTimeSummary,
    pub score: ScoreBreakdown,
    /// `score.overall` rounded for presentation
    pub optimization_score: u8,
    /// Ordered highest priority first
    pub recommendations: Vec<Recommendation>,
}

// ============================================================================
// YouTube Data API Types
// ============================================================================

/// Raw response from the videos.list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiVideoListResponse {
    #[serde(default)]
    pub items: Vec<ApiVideoItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVideoItem {
    pub id: String,
    pub snippet: ApiSnippet,
    #[serde(default)]
    pub statistics: Option<ApiStatistics>,
    #[serde(default)]
    pub content_details: Option<ApiContentDetails>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub thumbnails: ApiThumbnails,
}

/// Statistics block; the API serves counts as strings and omits hidden ones
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
    #[serde(default)]
    pub comment_count: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContentDetails {
    /// ISO-8601 duration, e.g. "PT5M33S"
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiThumbnails {
    #[serde(default)]
    pub high: Option<ApiThumbnail>,
    #[serde(default)]
    pub medium: Option<ApiThumbnail>,
    #[serde(default)]
    pub default: Option<ApiThumbnail>,
}

impl ApiThumbnails {
    /// Best available thumbnail, highest quality first
    pub fn best_url(&self) -> Option<String> {
        self.high
            .as_ref()
            .or(self.medium.as_ref())
            .or(self.default.as_ref())
            .map(|t| t.url.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiThumbnail {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_display_minutes() {
        let record = sample_record(213);
        assert_eq!(record.duration_display(), "3:33");
    }

    #[test]
    fn test_duration_display_hours() {
        let record = sample_record(3723);
        assert_eq!(record.duration_display(), "1:02:03");
    }

    #[test]
    fn test_duration_display_zero() {
        let record = sample_record(0);
        assert_eq!(record.duration_display(), "0:00");
    }

    #[test]
    fn test_video_record_partial_input_uses_defaults() {
        let json = r#"{"id":"dQw4w9WgXcQ","duration_seconds":300}"#;
        let record: VideoRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, "dQw4w9WgXcQ");
        assert_eq!(record.view_count, 0);
        assert_eq!(record.like_count, None);
        assert_eq!(record.comment_count, None);
        assert!(record.tags.is_empty());
        assert_eq!(record.category, None);
    }

    #[test]
    fn test_video_record_rejects_negative_counts() {
        let json = r#"{"id":"dQw4w9WgXcQ","duration_seconds":300,"view_count":-5}"#;
        assert!(serde_json::from_str::<VideoRecord>(json).is_err());
    }

    #[test]
    fn test_duration_bucket_serde() {
        let json = serde_json::to_string(&DurationBucket::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        assert_eq!(format!("{}", DurationBucket::Long), "long");
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&RecommendationCategory::ContentStrategy).unwrap();
        assert_eq!(json, "\"content_strategy\"");

        let json = serde_json::to_string(&RecommendationCategory::PostingStrategy).unwrap();
        assert_eq!(json, "\"posting_strategy\"");
    }

    #[test]
    fn test_priority_tier_order_is_output_order() {
        assert!(PriorityTier::Immediate < PriorityTier::Technical);
        assert!(PriorityTier::Technical < PriorityTier::Strategic);
    }

    #[test]
    fn test_rule_trigger_serde_shape() {
        let trigger = RuleTrigger::Threshold {
            metric: "engagement_rate".to_string(),
            observed: 0.3,
            threshold: 0.5,
        };
        let json = serde_json::to_string(&trigger).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"threshold","metric":"engagement_rate","observed":0.3,"threshold":0.5}"#
        );

        let missing = RuleTrigger::MissingSignal {
            metric: "engagement_rate".to_string(),
        };
        let json = serde_json::to_string(&missing).unwrap();
        assert_eq!(json, r#"{"kind":"missing_signal","metric":"engagement_rate"}"#);
    }

    #[test]
    fn test_score_breakdown_rounded() {
        let breakdown = ScoreBreakdown {
            engagement: 67.5,
            retention: 53.1,
            metadata: 100.0,
            duration_fit: 100.0,
            overall: 72.2,
        };
        assert_eq!(breakdown.rounded(), 72);
    }

    #[test]
    fn test_api_video_list_deserialization() {
        let json = r#"{
            "kind": "youtube#videoListResponse",
            "items": [
                {
                    "id": "dQw4w9WgXcQ",
                    "snippet": {
                        "publishedAt": "2009-10-25T06:57:33Z",
                        "channelId": "UC38IQsAvIsxxjztdMZQtwHA",
                        "title": "Never Gonna Give You Up",
                        "description": "Official video",
                        "channelTitle": "Rick Astley",
                        "tags": ["rick astley", "music"],
                        "categoryId": "10",
                        "thumbnails": {
                            "default": {"url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg", "width": 120, "height": 90},
                            "high": {"url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg", "width": 480, "height": 360}
                        }
                    },
                    "statistics": {"viewCount": "1234567", "commentCount": "890"},
                    "contentDetails": {"duration": "PT3M33S"}
                }
            ]
        }"#;

        let response: ApiVideoListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 1);

        let item = &response.items[0];
        assert_eq!(item.id, "dQw4w9WgXcQ");
        assert_eq!(item.snippet.channel_title, "Rick Astley");
        assert_eq!(item.snippet.category_id, Some("10".to_string()));

        // Hidden like count comes through as absent, not zero
        let stats = item.statistics.as_ref().unwrap();
        assert_eq!(stats.view_count, Some("1234567".to_string()));
        assert_eq!(stats.like_count, None);
        assert_eq!(stats.comment_count, Some("890".to_string()));

        let details = item.content_details.as_ref().unwrap();
        assert_eq!(details.duration, Some("PT3M33S".to_string()));

        assert_eq!(
            item.snippet.thumbnails.best_url(),
            Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string())
        );
    }

    #[test]
    fn test_empty_api_response_deserializes() {
        let response: ApiVideoListResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(response.items.is_empty());
    }

    fn sample_record(duration_seconds: u32) -> VideoRecord {
        VideoRecord {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Test Video".to_string(),
            description: String::new(),
            channel_title: String::new(),
            published_at: None,
            duration_seconds,
            view_count: 0,
            like_count: None,
            comment_count: None,
            tags: Vec::new(),
            category: None,
            thumbnail_url: None,
        }
    }
}
