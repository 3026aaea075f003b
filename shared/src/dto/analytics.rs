use serde::{Deserialize, Serialize};
use validator::Validate;

/// Data Transfer Object for overall prediction accuracy metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsDto {
    pub total_predictions: u64,
    pub correct_predictions: u64,

    /// Accuracy on a percent scale (e.g. 62.5)
    pub accuracy: f64,

    /// Omitted by the backend when there is not enough data yet
    #[serde(default)]
    pub sample_size: u64,

    /// Advisory text accompanying the insufficient-data response
    #[serde(default)]
    pub message: Option<String>,
}

impl AnalyticsDto {
    /// Accuracy formatted for display: "62.5%"
    pub fn accuracy_display(&self) -> String {
        format!("{:.1}%", self.accuracy)
    }
}

/// Request body for logging a game's actual result
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ResultLogDto {
    #[validate(length(min = 1, max = 200, message = "Game id is required"))]
    pub game_id: String,

    /// Winning team name as the user observed it
    #[validate(length(min = 1, max = 200, message = "Actual outcome is required"))]
    pub actual_outcome: String,
}
