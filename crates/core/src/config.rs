// Runtime configuration (environment-driven)

use crate::application::Timeline;
use crate::domain::BucketZone;
use crate::error::{AppError, Result};
use crate::port::{TextCodec, DEFAULT_TEXT_FORMAT};
use serde::{Deserialize, Serialize};

/// Zone used to align buckets (`utc`, `local`, `+09:00`)
pub const ENV_ZONE: &str = "TIMELINE_ZONE";
/// strftime layout for text output
pub const ENV_OUTPUT_FORMAT: &str = "TIMELINE_OUTPUT_FORMAT";

/// Timeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineConfig {
    pub zone: BucketZone,
    pub output_format: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            zone: BucketZone::default(),
            output_format: DEFAULT_TEXT_FORMAT.to_string(),
        }
    }
}

impl TimelineConfig {
    /// Load from `TIMELINE_*` environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup (tests, embedded callers)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(zone) = lookup(ENV_ZONE) {
            config.zone = zone
                .parse()
                .map_err(|e| AppError::Config(format!("{}: {}", ENV_ZONE, e)))?;
        }

        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            if format.trim().is_empty() {
                return Err(AppError::Config(format!("{} is empty", ENV_OUTPUT_FORMAT)));
            }
            config.output_format = format;
        }

        Ok(config)
    }

    pub fn timeline(&self) -> Timeline {
        Timeline::new(self.zone)
    }

    pub fn text_codec(&self) -> TextCodec {
        TextCodec::with_format(self.zone, self.output_format.clone())
    }
}
