use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Data Transfer Object for the engine's forecast of one game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionDto {
    /// Identifier shared with the game record
    pub game_id: String,

    /// Predicted winning team name
    pub predicted_outcome: String,

    /// Model confidence in [0, 1]
    pub confidence: f64,

    /// Ordered supporting reasons, strongest first
    #[serde(default)]
    pub reasons: Vec<String>,

    /// Per-factor weighted contribution for each participant. BTreeMap
    /// keeps the display order deterministic; the JSON object carries no
    /// order of its own.
    #[serde(default)]
    pub factor_contributions: BTreeMap<String, ContributionPair>,
}

impl PredictionDto {
    /// Confidence as a whole percent, round half-up: 0.837 -> 84
    pub fn confidence_percent(&self) -> u32 {
        confidence_percent(self.confidence)
    }
}

/// One factor's weighted contribution toward each participant.
/// Each value is in [0, 1]; the pair need not sum to 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ContributionPair {
    pub team_a: f64,
    pub team_b: f64,
}

/// Minimum rendered bar width so near-zero contributions stay visible
pub const BAR_FLOOR_PERCENT: f64 = 5.0;

impl ContributionPair {
    /// Larger of the two contributions; the scale reference for bars
    pub fn peak(&self) -> f64 {
        self.team_a.max(self.team_b)
    }

    /// Bar width for one contribution, scaled against this factor's own
    /// peak so the stronger side fills the meter, floored at 5%.
    pub fn bar_percent(&self, value: f64) -> f64 {
        let peak = self.peak();
        if peak <= 0.0 {
            return BAR_FLOOR_PERCENT;
        }
        ((value / peak) * 100.0).max(BAR_FLOOR_PERCENT)
    }

    /// Raw contribution as a percent label, one decimal
    pub fn label_percent(value: f64) -> String {
        format!("{:.1}%", value * 100.0)
    }
}

/// Rounds a [0, 1] share to a whole percent, half-up.
pub fn confidence_percent(confidence: f64) -> u32 {
    (confidence * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_confidence_percent_rounds_half_up() {
        let cases = [(0.837, 84), (0.835, 84), (0.0, 0), (1.0, 100), (0.004, 0)];
        for (confidence, expected) in cases {
            assert_eq!(confidence_percent(confidence), expected, "confidence: {confidence}");
        }
    }

    #[test]
    fn test_prediction_dto_deserializes_wire_shape() {
        let json = r#"{
            "game_id": "nba_2025_01_15_lakers_celtics",
            "predicted_outcome": "Los Angeles Lakers",
            "confidence": 0.54,
            "reasons": ["Offensive Efficiency: Los Angeles Lakers has stronger offensive efficiency (0.82)"],
            "factor_contributions": {
                "Recent Form": {"team_a": 0.15, "team_b": 0.13}
            }
        }"#;
        let dto: PredictionDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.predicted_outcome, "Los Angeles Lakers");
        assert_eq!(dto.confidence_percent(), 54);
        assert_eq!(dto.reasons.len(), 1);
        let pair = dto.factor_contributions["Recent Form"];
        assert_eq!(pair.team_a, 0.15);
        assert_eq!(pair.team_b, 0.13);
    }

    #[test]
    fn test_bar_percent_scales_against_factor_peak() {
        let pair = ContributionPair {
            team_a: 0.16,
            team_b: 0.08,
        };
        assert_eq!(pair.bar_percent(pair.team_a), 100.0);
        assert_eq!(pair.bar_percent(pair.team_b), 50.0);
    }

    #[test]
    fn test_bar_percent_floors_near_zero() {
        let pair = ContributionPair {
            team_a: 0.2,
            team_b: 0.001,
        };
        assert_eq!(pair.bar_percent(pair.team_b), BAR_FLOOR_PERCENT);

        let zeros = ContributionPair {
            team_a: 0.0,
            team_b: 0.0,
        };
        assert_eq!(zeros.bar_percent(zeros.team_a), BAR_FLOOR_PERCENT);
    }

    #[test]
    fn test_label_percent_one_decimal() {
        assert_eq!(ContributionPair::label_percent(0.15), "15.0%");
        assert_eq!(ContributionPair::label_percent(0.0), "0.0%");
    }
}
