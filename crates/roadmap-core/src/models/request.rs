use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::level::Level;

/// A validated roadmap request: what to learn, over how many days, from
/// which starting level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapRequest {
    pub topic: String,
    pub duration_days: NonZeroU32,
    pub level: Level,
}

impl RoadmapRequest {
    /// Validate raw form input.
    ///
    /// Emptiness is checked for every field before the duration is parsed,
    /// so a blank form always reports the missing-field error first.
    pub fn parse(topic: &str, duration_days: &str, level: &str) -> Result<Self, CoreError> {
        let topic = topic.trim();
        let duration = duration_days.trim();

        if topic.is_empty() {
            return Err(CoreError::MissingField("topic"));
        }
        if duration.is_empty() {
            return Err(CoreError::MissingField("duration"));
        }
        if level.trim().is_empty() {
            return Err(CoreError::MissingField("level"));
        }

        let duration_days = duration
            .parse::<NonZeroU32>()
            .map_err(|_| CoreError::InvalidDuration(duration.to_string()))?;
        let level = level.parse::<Level>()?;

        Ok(Self {
            topic: topic.to_string(),
            duration_days,
            level,
        })
    }
}
