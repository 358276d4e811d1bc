use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// YouTube Data API v3 key
    pub youtube_api_key: String,

    /// YouTube Data API base URL
    #[serde(default = "default_youtube_api_url")]
    pub youtube_api_url: String,

    /// Redis connection URL
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    // Scoring engine tunables; defaults match EngineConfig::default()
    #[serde(default = "default_engagement_weight")]
    pub engagement_weight: f64,

    #[serde(default = "default_retention_weight")]
    pub retention_weight: f64,

    #[serde(default = "default_metadata_weight")]
    pub metadata_weight: f64,

    #[serde(default = "default_duration_weight")]
    pub duration_weight: f64,

    #[serde(default = "default_uplift_fraction")]
    pub uplift_fraction: f64,

    #[serde(default = "default_short_max_seconds")]
    pub short_max_seconds: u32,

    #[serde(default = "default_medium_max_seconds")]
    pub medium_max_seconds: u32,
}

fn default_youtube_api_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_engagement_weight() -> f64 {
    0.35
}

fn default_retention_weight() -> f64 {
    0.35
}

fn default_metadata_weight() -> f64 {
    0.15
}

fn default_duration_weight() -> f64 {
    0.15
}

fn default_uplift_fraction() -> f64 {
    0.15
}

fn default_short_max_seconds() -> u32 {
    240
}

fn default_medium_max_seconds() -> u32 {
    1200
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Builds the validated scoring-engine configuration
    pub fn engine(&self) -> AppResult<EngineConfig> {
        let engine = EngineConfig {
            engagement_weight: self.engagement_weight,
            retention_weight: self.retention_weight,
            metadata_weight: self.metadata_weight,
            duration_weight: self.duration_weight,
            uplift_fraction: self.uplift_fraction,
            short_max_seconds: self.short_max_seconds,
            medium_max_seconds: self.medium_max_seconds,
        };
        engine.validate()?;
        Ok(engine)
    }
}

/// Tunables for the scoring engine, validated once at startup
///
/// The analysis path assumes a validated instance: weights are non-negative
/// and sum to 1.0, uplift is within [0.0, 1.0], and the duration bucket
/// bounds are strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub engagement_weight: f64,
    pub retention_weight: f64,
    pub metadata_weight: f64,
    pub duration_weight: f64,
    /// Achievable retention gain assumed when projecting potential watch time
    pub uplift_fraction: f64,
    /// Upper bound of the short duration bucket, exclusive (seconds)
    pub short_max_seconds: u32,
    /// Upper bound of the medium duration bucket, inclusive (seconds)
    pub medium_max_seconds: u32,
}

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            engagement_weight: default_engagement_weight(),
            retention_weight: default_retention_weight(),
            metadata_weight: default_metadata_weight(),
            duration_weight: default_duration_weight(),
            uplift_fraction: default_uplift_fraction(),
            short_max_seconds: default_short_max_seconds(),
            medium_max_seconds: default_medium_max_seconds(),
        }
    }
}

impl EngineConfig {
    /// Checks weights, uplift and bucket bounds
    ///
    /// Invalid values are a configuration error at load time; analysis
    /// never re-validates.
    pub fn validate(&self) -> AppResult<()> {
        let weights = [
            self.engagement_weight,
            self.retention_weight,
            self.metadata_weight,
            self.duration_weight,
        ];

        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(AppError::Configuration(
                "score weights must be finite and non-negative".to_string(),
            ));
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(AppError::Configuration(format!(
                "score weights must sum to 1.0, got {}",
                sum
            )));
        }

        if !self.uplift_fraction.is_finite()
            || self.uplift_fraction < 0.0
            || self.uplift_fraction > 1.0
        {
            return Err(AppError::Configuration(format!(
                "uplift_fraction must be within [0.0, 1.0], got {}",
                self.uplift_fraction
            )));
        }

        if self.short_max_seconds == 0 || self.short_max_seconds >= self.medium_max_seconds {
            return Err(AppError::Configuration(
                "duration buckets must satisfy 0 < short_max_seconds < medium_max_seconds"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
