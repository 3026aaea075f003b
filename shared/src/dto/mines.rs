use serde::{Deserialize, Serialize};

use crate::dto::prediction::confidence_percent;

/// Cosmetic probability thresholds for tile affordances. They never gate
/// which cells are clickable.
pub const LIKELY_SAFE_THRESHOLD: f64 = 0.7;
pub const LIKELY_MINE_THRESHOLD: f64 = 0.4;

/// Data Transfer Object for a freshly created mines session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MinesSessionDto {
    pub game_id: String,

    /// Server-confirmed bomb count; may differ from the requested one,
    /// the client displays rather than enforces it
    pub num_bombs: u32,
}

/// Aggregate session statistics as the server tracks them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MinesStatsDto {
    pub safe_clicks: u32,
    pub bombs_hit: u32,
    pub total_clicks: u32,
    pub bombs_remaining: u32,
    pub remaining_safe: u32,
}

impl MinesStatsDto {
    /// Stats for a board with no moves yet, seeded from the confirmed
    /// bomb count
    pub fn fresh(grid_size: u32, num_bombs: u32) -> Self {
        let total_tiles = grid_size * grid_size;
        Self {
            safe_clicks: 0,
            bombs_hit: 0,
            total_clicks: 0,
            bombs_remaining: num_bombs,
            remaining_safe: total_tiles.saturating_sub(num_bombs),
        }
    }
}

/// Data Transfer Object for the outcome of one reported move
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MinesMoveOutcomeDto {
    pub stats: MinesStatsDto,
}

/// Data Transfer Object for one recommended tile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TileRecommendationDto {
    pub x: u32,
    pub y: u32,

    /// Probability in [0, 1] that the tile is safe
    pub safe_probability: f64,

    /// Model confidence in this estimate
    pub confidence: f64,

    /// "SAFE" | "RISKY" | "NEUTRAL"
    pub recommendation: String,
}

impl TileRecommendationDto {
    /// Safety probability as a whole percent, round half-up
    pub fn safe_percent(&self) -> u32 {
        confidence_percent(self.safe_probability)
    }

    pub fn is_likely_safe(&self) -> bool {
        self.safe_probability > LIKELY_SAFE_THRESHOLD
    }

    pub fn is_likely_mine(&self) -> bool {
        self.safe_probability < LIKELY_MINE_THRESHOLD
    }

    /// Short tag under the percent on pick cards
    pub fn tag(&self) -> &'static str {
        if self.recommendation == "SAFE" {
            "Safe Bet"
        } else {
            "Consider"
        }
    }
}

/// Data Transfer Object for the recommendation list, best-first in the
/// order the server ranked it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MinesRecommendationsDto {
    #[serde(default)]
    pub tiles: Vec<TileRecommendationDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fresh_stats_seed_from_confirmed_count() {
        let stats = MinesStatsDto::fresh(6, 5);
        assert_eq!(stats.total_clicks, 0);
        assert_eq!(stats.bombs_remaining, 5);
        assert_eq!(stats.remaining_safe, 31);
    }

    #[test]
    fn test_session_deserializes_wire_shape() {
        let json = r#"{"game_id": "mines_5_1736900000_ab12cd34", "num_bombs": 3}"#;
        let dto: MinesSessionDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.num_bombs, 3);
    }

    #[test]
    fn test_move_outcome_nested_stats() {
        let json = r#"{
            "stats": {
                "safe_clicks": 4,
                "bombs_hit": 0,
                "total_clicks": 4,
                "bombs_remaining": 3,
                "remaining_safe": 18,
                "win_percentage": 100.0,
                "streak": 4
            }
        }"#;
        let outcome: MinesMoveOutcomeDto = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.stats.safe_clicks, 4);
        assert_eq!(outcome.stats.remaining_safe, 18);
    }

    #[test]
    fn test_tile_affordance_thresholds_are_cosmetic_bands() {
        let tile = |p: f64| TileRecommendationDto {
            x: 0,
            y: 0,
            safe_probability: p,
            confidence: 0.7,
            recommendation: "NEUTRAL".to_string(),
        };
        assert!(tile(0.71).is_likely_safe());
        assert!(!tile(0.7).is_likely_safe());
        assert!(tile(0.39).is_likely_mine());
        assert!(!tile(0.4).is_likely_mine());
        assert_eq!(tile(0.864).safe_percent(), 86);
    }

    #[test]
    fn test_recommendation_tags() {
        let mut tile = TileRecommendationDto {
            x: 2,
            y: 1,
            safe_probability: 0.9,
            confidence: 0.8,
            recommendation: "SAFE".to_string(),
        };
        assert_eq!(tile.tag(), "Safe Bet");
        tile.recommendation = "NEUTRAL".to_string();
        assert_eq!(tile.tag(), "Consider");
    }

    #[test]
    fn test_recommendations_default_to_empty() {
        let dto: MinesRecommendationsDto = serde_json::from_str("{}").unwrap();
        assert!(dto.tiles.is_empty());
    }
}
