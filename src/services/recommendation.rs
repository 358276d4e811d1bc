use chrono::{Datelike, Timelike, Weekday};

use crate::models::{
    EngagementMetrics, PriorityTier, Recommendation, RecommendationCategory, RetentionEstimate,
    RuleTrigger, ScoreBreakdown, VideoRecord,
};

use super::scoring::{MIN_DESCRIPTION_LEN, MIN_TAG_COUNT};

/// Overall score at or above which the video earns a single affirmation and
/// every deficit rule is suppressed
const AFFIRMATION_SCORE: f64 = 90.0;

/// Sub-score levels treated as acute deficits
const LOW_METADATA_SCORE: f64 = 40.0;
const LOW_RETENTION_SCORE: f64 = 40.0;

const MAX_TITLE_LEN: usize = 60;
const MIN_TITLE_LEN: usize = 20;

const LONG_VIDEO_SECONDS: u32 = 1_200;
const CHAPTERS_SECONDS: u32 = 600;
const HOOK_SECONDS: u32 = 300;

const LOW_VIEWS: u64 = 1_000;
const STRUGGLING_VIEWS: u64 = 500;

/// Engagement-rate bands (per 100 views)
const DEAD_ENGAGEMENT_RATE: f64 = 0.5;
const LOW_ENGAGEMENT_RATE: f64 = 2.0;
const HIGH_ENGAGEMENT_RATE: f64 = 5.0;

const COMPETITIVE_SCORE: f64 = 75.0;

/// Publish hours (UTC) outside of which uploads count as off-peak
const EARLY_HOUR: u32 = 6;
const LATE_HOUR: u32 = 22;

/// Everything a rule may inspect
pub struct RuleContext<'a> {
    pub record: &'a VideoRecord,
    pub metrics: &'a EngagementMetrics,
    pub retention: &'a RetentionEstimate,
    pub score: &'a ScoreBreakdown,
}

type RuleEval = fn(&RuleContext) -> Option<(RuleTrigger, String)>;

/// One entry in the rule table
struct Rule {
    category: RecommendationCategory,
    priority: PriorityTier,
    eval: RuleEval,
}

/// The fixed rule table, grouped by category in presentation order. Each rule
/// fires at most once per analysis.
static RULES: &[Rule] = &[
    // Content strategy
    Rule {
        category: RecommendationCategory::ContentStrategy,
        priority: PriorityTier::Immediate,
        eval: weak_metadata,
    },
    Rule {
        category: RecommendationCategory::ContentStrategy,
        priority: PriorityTier::Strategic,
        eval: short_description,
    },
    Rule {
        category: RecommendationCategory::ContentStrategy,
        priority: PriorityTier::Strategic,
        eval: few_tags,
    },
    Rule {
        category: RecommendationCategory::ContentStrategy,
        priority: PriorityTier::Strategic,
        eval: long_title,
    },
    Rule {
        category: RecommendationCategory::ContentStrategy,
        priority: PriorityTier::Strategic,
        eval: short_title,
    },
    // Technical
    Rule {
        category: RecommendationCategory::Technical,
        priority: PriorityTier::Immediate,
        eval: long_video_weak_retention,
    },
    Rule {
        category: RecommendationCategory::Technical,
        priority: PriorityTier::Technical,
        eval: add_chapters,
    },
    Rule {
        category: RecommendationCategory::Technical,
        priority: PriorityTier::Technical,
        eval: production_basics,
    },
    // Engagement tactics
    Rule {
        category: RecommendationCategory::EngagementTactics,
        priority: PriorityTier::Immediate,
        eval: dead_engagement,
    },
    Rule {
        category: RecommendationCategory::EngagementTactics,
        priority: PriorityTier::Strategic,
        eval: low_engagement,
    },
    Rule {
        category: RecommendationCategory::EngagementTactics,
        priority: PriorityTier::Strategic,
        eval: high_engagement,
    },
    Rule {
        category: RecommendationCategory::EngagementTactics,
        priority: PriorityTier::Strategic,
        eval: front_load_value,
    },
    // Competitive
    Rule {
        category: RecommendationCategory::Competitive,
        priority: PriorityTier::Strategic,
        eval: category_insight,
    },
    Rule {
        category: RecommendationCategory::Competitive,
        priority: PriorityTier::Strategic,
        eval: study_competitors,
    },
    // Posting strategy
    Rule {
        category: RecommendationCategory::PostingStrategy,
        priority: PriorityTier::Strategic,
        eval: build_consistency,
    },
    Rule {
        category: RecommendationCategory::PostingStrategy,
        priority: PriorityTier::Strategic,
        eval: weekend_upload,
    },
    Rule {
        category: RecommendationCategory::PostingStrategy,
        priority: PriorityTier::Strategic,
        eval: off_peak_upload,
    },
    Rule {
        category: RecommendationCategory::PostingStrategy,
        priority: PriorityTier::Strategic,
        eval: nurture_community,
    },
];

/// Evaluates the rule table and orders the output highest priority first
///
/// The sort is stable, so within a tier the table's category-major order is
/// preserved. A video at or above the affirmation score gets exactly one
/// recommendation.
pub fn recommend(ctx: &RuleContext) -> Vec<Recommendation> {
    if ctx.score.overall >= AFFIRMATION_SCORE {
        return vec![affirmation(ctx)];
    }

    let mut recommendations: Vec<Recommendation> = RULES
        .iter()
        .filter_map(|rule| {
            (rule.eval)(ctx).map(|(trigger, message)| Recommendation {
                category: rule.category,
                priority: rule.priority,
                message,
                trigger,
            })
        })
        .collect();

    recommendations.sort_by_key(|r| r.priority);
    recommendations
}

fn affirmation(ctx: &RuleContext) -> Recommendation {
    Recommendation {
        category: RecommendationCategory::ContentStrategy,
        priority: PriorityTier::Strategic,
        message: "This video is well optimized for watch time. Keep the current strategy and \
                  replicate its structure in future uploads."
            .to_string(),
        trigger: RuleTrigger::Threshold {
            metric: "overall_score".to_string(),
            observed: ctx.score.overall,
            threshold: AFFIRMATION_SCORE,
        },
    }
}

fn threshold(metric: &str, observed: f64, threshold: f64) -> RuleTrigger {
    RuleTrigger::Threshold {
        metric: metric.to_string(),
        observed,
        threshold,
    }
}

// --- Content strategy ---

fn weak_metadata(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    if ctx.score.metadata >= LOW_METADATA_SCORE {
        return None;
    }
    Some((
        threshold("metadata_score", ctx.score.metadata, LOW_METADATA_SCORE),
        "Metadata is incomplete and hurting discoverability. Fill in the description, tags, \
         category, and a custom thumbnail before anything else."
            .to_string(),
    ))
}

fn short_description(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    let len = ctx.record.description.len();
    if len >= MIN_DESCRIPTION_LEN {
        return None;
    }
    Some((
        threshold("description_length", len as f64, MIN_DESCRIPTION_LEN as f64),
        "The description is quite short. Aim for 150-300 words with timestamps, key points, \
         and relevant keywords."
            .to_string(),
    ))
}

fn few_tags(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    let count = ctx.record.tags.len();
    if count >= MIN_TAG_COUNT {
        return None;
    }
    Some((
        threshold("tag_count", count as f64, MIN_TAG_COUNT as f64),
        "Add more relevant tags (10-15) so the video surfaces across different search queries."
            .to_string(),
    ))
}

fn long_title(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    let len = ctx.record.title.len();
    if len <= MAX_TITLE_LEN {
        return None;
    }
    Some((
        threshold("title_length", len as f64, MAX_TITLE_LEN as f64),
        "The title is quite long. Keep it under 60 characters while preserving the key keywords."
            .to_string(),
    ))
}

fn short_title(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    let len = ctx.record.title.len();
    if len >= MIN_TITLE_LEN {
        return None;
    }
    Some((
        threshold("title_length", len as f64, MIN_TITLE_LEN as f64),
        "The title might be too short. Add descriptive keywords about what viewers will learn \
         or gain."
            .to_string(),
    ))
}

// --- Technical ---

fn long_video_weak_retention(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    if ctx.record.duration_seconds <= LONG_VIDEO_SECONDS
        || ctx.score.retention >= LOW_RETENTION_SCORE
    {
        return None;
    }
    Some((
        threshold("retention_score", ctx.score.retention, LOW_RETENTION_SCORE),
        "A long video with weak estimated retention loses most of its potential watch time. \
         Break it into a series or restructure the pacing."
            .to_string(),
    ))
}

fn add_chapters(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    if ctx.record.duration_seconds <= CHAPTERS_SECONDS {
        return None;
    }
    Some((
        threshold(
            "duration_seconds",
            ctx.record.duration_seconds as f64,
            CHAPTERS_SECONDS as f64,
        ),
        "Add chapter markers, and a pattern interrupt every 2-3 minutes: graphics, questions, \
         or topic changes keep attention."
            .to_string(),
    ))
}

fn production_basics(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    if ctx.record.view_count >= LOW_VIEWS {
        return None;
    }
    Some((
        threshold("view_count", ctx.record.view_count as f64, LOW_VIEWS as f64),
        "Audio quality matters more than video quality for retention. Check sound, lighting, \
         and the first 15 seconds."
            .to_string(),
    ))
}

// --- Engagement tactics ---

fn dead_engagement(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    let trigger = match ctx.metrics.engagement_rate {
        None => RuleTrigger::MissingSignal {
            metric: "engagement_rate".to_string(),
        },
        Some(rate) if rate < DEAD_ENGAGEMENT_RATE => {
            threshold("engagement_rate", rate, DEAD_ENGAGEMENT_RATE)
        }
        Some(_) => return None,
    };
    Some((
        trigger,
        "Engagement is close to silent. Ask direct questions and add explicit calls-to-action \
         for likes and comments."
            .to_string(),
    ))
}

fn low_engagement(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    let rate = ctx.metrics.engagement_rate?;
    if rate < DEAD_ENGAGEMENT_RATE || rate >= LOW_ENGAGEMENT_RATE {
        return None;
    }
    Some((
        threshold("engagement_rate", rate, LOW_ENGAGEMENT_RATE),
        "Engagement is below average. Try interactive elements: polls, questions, or a \
         challenge in the comments."
            .to_string(),
    ))
}

fn high_engagement(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    let rate = ctx.metrics.engagement_rate?;
    if rate < HIGH_ENGAGEMENT_RATE {
        return None;
    }
    Some((
        threshold("engagement_rate", rate, HIGH_ENGAGEMENT_RATE),
        "Engagement is strong. Double down with follow-up content built on viewer comments \
         and questions."
            .to_string(),
    ))
}

fn front_load_value(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    if ctx.record.duration_seconds <= HOOK_SECONDS {
        return None;
    }
    Some((
        threshold(
            "duration_seconds",
            ctx.record.duration_seconds as f64,
            HOOK_SECONDS as f64,
        ),
        "Strengthen the opening hook. Promise specific value in the first 30 seconds and \
         deliver on it early."
            .to_string(),
    ))
}

// --- Competitive ---

fn category_insight(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    let label = ctx.record.category.as_deref()?;
    let insight = niche_insight(label)?;
    Some((
        RuleTrigger::Attribute {
            metric: "category".to_string(),
            value: label.to_string(),
        },
        insight.to_string(),
    ))
}

fn study_competitors(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    if ctx.score.overall >= COMPETITIVE_SCORE {
        return None;
    }
    Some((
        threshold("overall_score", ctx.score.overall, COMPETITIVE_SCORE),
        "Research top-performing videos in this niche and analyze their structure, hooks, \
         and thumbnails."
            .to_string(),
    ))
}

// --- Posting strategy ---

fn build_consistency(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    if ctx.record.view_count >= STRUGGLING_VIEWS {
        return None;
    }
    Some((
        threshold(
            "view_count",
            ctx.record.view_count as f64,
            STRUGGLING_VIEWS as f64,
        ),
        "Focus on consistency over frequency. A regular upload schedule builds audience \
         expectation; cross-promote to drive the first views."
            .to_string(),
    ))
}

fn weekend_upload(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    let published = ctx.record.published_at?;
    let weekday = published.weekday();
    if !matches!(weekday, Weekday::Sat | Weekday::Sun) {
        return None;
    }
    Some((
        RuleTrigger::Attribute {
            metric: "publish_weekday".to_string(),
            value: weekday.to_string(),
        },
        "This video went out on a weekend. Many channels perform better Tuesday through \
         Thursday; test weekday uploads."
            .to_string(),
    ))
}

fn off_peak_upload(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    let published = ctx.record.published_at?;
    let hour = published.hour();
    if (EARLY_HOUR..LATE_HOUR).contains(&hour) {
        return None;
    }
    Some((
        RuleTrigger::Attribute {
            metric: "publish_hour".to_string(),
            value: hour.to_string(),
        },
        "The upload time looks off-peak. Test publishing during the hours your audience is \
         actually active."
            .to_string(),
    ))
}

fn nurture_community(ctx: &RuleContext) -> Option<(RuleTrigger, String)> {
    if ctx.record.view_count < LOW_VIEWS {
        return None;
    }
    Some((
        threshold("view_count", ctx.record.view_count as f64, LOW_VIEWS as f64),
        "Reply to comments within the first few hours and use community posts to keep viewers \
         engaged between uploads."
            .to_string(),
    ))
}

/// Niche advice keyed by category label
fn niche_insight(label: &str) -> Option<&'static str> {
    match label {
        "Film & Animation" => {
            Some("Film & Animation: lean into trending topics and seasonal content for better discoverability.")
        }
        "Autos & Vehicles" => {
            Some("Autos & Vehicles: comparison and head-to-head videos draw high engagement.")
        }
        "Music" => {
            Some("Music: lyric videos, covers, and production breakdowns extend a release's reach.")
        }
        "Pets & Animals" => {
            Some("Pets & Animals: heartwarming or funny compilations with a storyline hold viewers.")
        }
        "Sports" => Some("Sports: highlights, analysis, and prediction content perform consistently."),
        "Travel & Events" => {
            Some("Travel & Events: use location keywords and seasonal content strategies.")
        }
        "Gaming" => {
            Some("Gaming: stream highlights, tutorials, and new-release reviews are reliable formats.")
        }
        "People & Blogs" => {
            Some("People & Blogs: storytelling and personal experience hold attention best.")
        }
        "Comedy" => Some("Comedy: ride trending formats and collaborate with other creators."),
        "Entertainment" => {
            Some("Entertainment: stay current with pop culture and entertainment news.")
        }
        "News & Politics" => {
            Some("News & Politics: timely, accurate reporting with clear sources builds trust.")
        }
        "Howto & Style" => {
            Some("Howto & Style: step-by-step tutorials and before/after reveals convert well.")
        }
        "Education" => {
            Some("Education: clear explanations with visual aids and worked examples keep watch time high.")
        }
        "Science & Technology" => {
            Some("Science & Technology: explain complex topics in simple terms.")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DurationBucket;
    use chrono::{TimeZone, Utc};

    struct Fixture {
        record: VideoRecord,
        metrics: EngagementMetrics,
        retention: RetentionEstimate,
        score: ScoreBreakdown,
    }

    impl Fixture {
        fn ctx(&self) -> RuleContext<'_> {
            RuleContext {
                record: &self.record,
                metrics: &self.metrics,
                retention: &self.retention,
                score: &self.score,
            }
        }
    }

    /// The moderately performing video from the scoring examples: complete
    /// metadata, strong engagement, mid-range overall score
    fn moderate_video() -> Fixture {
        Fixture {
            record: VideoRecord {
                id: "test00000id".to_string(),
                title: "How to optimize your videos".to_string(),
                description: "d".repeat(150),
                channel_title: "Channel".to_string(),
                published_at: None,
                duration_seconds: 600,
                view_count: 100_000,
                like_count: Some(5_000),
                comment_count: Some(200),
                tags: vec!["x".into(), "y".into(), "z".into(), "w".into()],
                category: Some("Education".to_string()),
                thumbnail_url: Some("https://example.com/t.jpg".to_string()),
            },
            metrics: EngagementMetrics {
                like_rate: Some(5.0),
                comment_rate: Some(0.2),
                engagement_rate: Some(5.2),
            },
            retention: RetentionEstimate {
                fraction: 0.528,
                bucket: DurationBucket::Medium,
            },
            score: ScoreBreakdown {
                engagement: 67.5,
                retention: 53.1,
                metadata: 100.0,
                duration_fit: 100.0,
                overall: 72.2,
            },
        }
    }

    /// A neglected upload: bare metadata, no engagement signal, long runtime
    fn struggling_video() -> Fixture {
        Fixture {
            record: VideoRecord {
                id: "test00000id".to_string(),
                title: "Test".to_string(),
                description: String::new(),
                channel_title: String::new(),
                published_at: None,
                duration_seconds: 1_300,
                view_count: 100,
                like_count: None,
                comment_count: None,
                tags: Vec::new(),
                category: None,
                thumbnail_url: None,
            },
            metrics: EngagementMetrics {
                like_rate: None,
                comment_rate: None,
                engagement_rate: None,
            },
            retention: RetentionEstimate {
                fraction: 0.30,
                bucket: DurationBucket::Long,
            },
            score: ScoreBreakdown {
                engagement: 20.0,
                retention: 27.8,
                metadata: 0.0,
                duration_fit: 40.0,
                overall: 22.7,
            },
        }
    }

    #[test]
    fn test_affirmation_suppresses_deficit_rules() {
        let mut fixture = struggling_video();
        fixture.score.overall = 92.0;

        let recommendations = recommend(&fixture.ctx());

        assert_eq!(recommendations.len(), 1);
        let only = &recommendations[0];
        assert_eq!(only.category, RecommendationCategory::ContentStrategy);
        assert_eq!(only.priority, PriorityTier::Strategic);
        assert!(only.message.contains("well optimized"));
        assert!(matches!(
            only.trigger,
            RuleTrigger::Threshold { observed, .. } if observed == 92.0
        ));
    }

    #[test]
    fn test_immediate_rules_come_first() {
        let fixture = struggling_video();
        let recommendations = recommend(&fixture.ctx());

        // Three acute deficits: metadata, long-with-weak-retention, engagement
        let immediate: Vec<_> = recommendations
            .iter()
            .take_while(|r| r.priority == PriorityTier::Immediate)
            .collect();
        assert_eq!(immediate.len(), 3);
        assert_eq!(immediate[0].category, RecommendationCategory::ContentStrategy);
        assert_eq!(immediate[1].category, RecommendationCategory::Technical);
        assert_eq!(immediate[2].category, RecommendationCategory::EngagementTactics);

        // Tier order is immediate, technical, strategic
        let tiers: Vec<_> = recommendations.iter().map(|r| r.priority).collect();
        let mut sorted = tiers.clone();
        sorted.sort();
        assert_eq!(tiers, sorted);
    }

    #[test]
    fn test_technical_tier_sits_between() {
        let fixture = struggling_video();
        let recommendations = recommend(&fixture.ctx());

        let technical: Vec<_> = recommendations
            .iter()
            .filter(|r| r.priority == PriorityTier::Technical)
            .collect();
        // Chapters (duration > 600) and production basics (views < 1000)
        assert_eq!(technical.len(), 2);
        assert!(technical[0].message.contains("chapter"));
        assert!(technical[1].message.contains("Audio quality"));
    }

    #[test]
    fn test_moderate_video_gets_only_strategic_advice() {
        let fixture = moderate_video();
        let recommendations = recommend(&fixture.ctx());

        assert!(!recommendations.is_empty());
        assert!(recommendations
            .iter()
            .all(|r| r.priority == PriorityTier::Strategic));

        // Category-major table order within the tier
        let categories: Vec<_> = recommendations.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![
                RecommendationCategory::EngagementTactics, // strong engagement
                RecommendationCategory::EngagementTactics, // front-load the hook
                RecommendationCategory::Competitive,       // Education niche insight
                RecommendationCategory::Competitive,       // overall below 75
                RecommendationCategory::PostingStrategy,   // nurture community
            ]
        );
    }

    #[test]
    fn test_dead_engagement_trigger_distinguishes_missing_from_low() {
        let mut fixture = struggling_video();

        let recommendations = recommend(&fixture.ctx());
        let dead = recommendations
            .iter()
            .find(|r| r.category == RecommendationCategory::EngagementTactics)
            .unwrap();
        assert!(matches!(dead.trigger, RuleTrigger::MissingSignal { .. }));

        fixture.metrics.engagement_rate = Some(0.3);
        let recommendations = recommend(&fixture.ctx());
        let dead = recommendations
            .iter()
            .find(|r| r.category == RecommendationCategory::EngagementTactics)
            .unwrap();
        assert!(matches!(
            dead.trigger,
            RuleTrigger::Threshold { observed, .. } if observed == 0.3
        ));
    }

    #[test]
    fn test_engagement_bands_are_disjoint() {
        let mut fixture = moderate_video();

        // 1.0 sits in the low band only
        fixture.metrics.engagement_rate = Some(1.0);
        let messages: Vec<_> = recommend(&fixture.ctx())
            .into_iter()
            .filter(|r| r.category == RecommendationCategory::EngagementTactics)
            .map(|r| r.message)
            .collect();
        assert!(messages.iter().any(|m| m.contains("below average")));
        assert!(!messages.iter().any(|m| m.contains("close to silent")));
        assert!(!messages.iter().any(|m| m.contains("Double down")));

        // 3.0 sits between the bands; only the hook rule remains
        fixture.metrics.engagement_rate = Some(3.0);
        let messages: Vec<_> = recommend(&fixture.ctx())
            .into_iter()
            .filter(|r| r.category == RecommendationCategory::EngagementTactics)
            .map(|r| r.message)
            .collect();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("opening hook"));
    }

    #[test]
    fn test_title_length_rules() {
        let mut fixture = moderate_video();

        fixture.record.title = "x".repeat(70);
        let recommendations = recommend(&fixture.ctx());
        assert!(recommendations
            .iter()
            .any(|r| r.message.contains("quite long")));

        fixture.record.title = "Short".to_string();
        let recommendations = recommend(&fixture.ctx());
        assert!(recommendations
            .iter()
            .any(|r| r.message.contains("too short")));
    }

    #[test]
    fn test_category_insight_for_known_label() {
        let fixture = moderate_video();
        let recommendations = recommend(&fixture.ctx());

        let insight = recommendations
            .iter()
            .find(|r| matches!(&r.trigger, RuleTrigger::Attribute { metric, .. } if metric == "category"))
            .unwrap();
        assert!(insight.message.starts_with("Education:"));
    }

    #[test]
    fn test_unknown_category_label_has_no_insight() {
        let mut fixture = moderate_video();
        fixture.record.category = Some("Nonprofits & Activism".to_string());

        let recommendations = recommend(&fixture.ctx());
        assert!(!recommendations
            .iter()
            .any(|r| matches!(&r.trigger, RuleTrigger::Attribute { metric, .. } if metric == "category")));
    }

    #[test]
    fn test_weekend_upload_rule() {
        let mut fixture = moderate_video();
        // A Saturday at midday
        fixture.record.published_at = Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());

        let recommendations = recommend(&fixture.ctx());
        assert!(recommendations
            .iter()
            .any(|r| r.message.contains("weekend")));
        assert!(!recommendations
            .iter()
            .any(|r| r.message.contains("off-peak")));
    }

    #[test]
    fn test_off_peak_upload_rule() {
        let mut fixture = moderate_video();
        // A Tuesday at 23:00 UTC
        fixture.record.published_at = Some(Utc.with_ymd_and_hms(2024, 6, 4, 23, 0, 0).unwrap());

        let recommendations = recommend(&fixture.ctx());
        assert!(recommendations
            .iter()
            .any(|r| r.message.contains("off-peak")));
        assert!(!recommendations
            .iter()
            .any(|r| r.message.contains("weekend")));
    }

    #[test]
    fn test_unknown_publish_time_skips_posting_time_rules() {
        let fixture = moderate_video();
        let recommendations = recommend(&fixture.ctx());

        assert!(!recommendations
            .iter()
            .any(|r| r.message.contains("weekend") || r.message.contains("off-peak")));
    }

    #[test]
    fn test_rules_fire_at_most_once() {
        let fixture = struggling_video();
        let recommendations = recommend(&fixture.ctx());

        let mut messages: Vec<_> = recommendations.iter().map(|r| &r.message).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), recommendations.len());
    }
}
