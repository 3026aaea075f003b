use serde::{Deserialize, Serialize};
use validator::Validate;

/// All chat traffic is anonymous; there are no user accounts
pub const ANONYMOUS_USER: &str = "anonymous";

/// Request body for one advice-chat message
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ChatRequestDto {
    #[validate(length(
        min = 1,
        max = 2000,
        message = "Message is required and must be at most 2000 characters"
    ))]
    pub message: String,

    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,
}

impl ChatRequestDto {
    pub fn anonymous(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            user_id: ANONYMOUS_USER.to_string(),
        }
    }
}

/// Data Transfer Object for the guru's reply to one chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReplyDto {
    pub ai_message: String,

    /// Server-side reply time, ISO formatted
    pub timestamp: String,

    /// Games the guru wants to surface alongside the reply
    #[serde(default)]
    pub suggested_games: Vec<GamePickDto>,
}

/// Data Transfer Object for a game surfaced with prediction fields
/// attached; used by chat suggestions and the popular-games list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GamePickDto {
    pub game_id: String,
    pub sport: String,
    pub team_a: String,
    pub team_b: String,
    pub scheduled_date: String,
    pub predicted_outcome: String,

    /// Already on a percent scale (e.g. 67), unlike Prediction.confidence
    pub confidence: f64,

    /// Short reasoning lines; chat suggestions carry them, the
    /// popular-games list omits them
    #[serde(default)]
    pub reasoning: Vec<String>,
}

impl GamePickDto {
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.team_a, self.team_b)
    }

    /// "67%"; the wire value is already a percent
    pub fn confidence_display(&self) -> String {
        format!("{}%", self.confidence)
    }

    pub fn reasoning_headline(&self) -> Option<&str> {
        self.reasoning.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chat_request_anonymous_ctor() {
        let req = ChatRequestDto::anonymous("best NBA picks?");
        assert_eq!(req.user_id, "anonymous");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_chat_request_validation_empty_message() {
        let req = ChatRequestDto::anonymous("");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_chat_request_validation_overlong_message() {
        let req = ChatRequestDto::anonymous("x".repeat(2001));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_chat_reply_deserializes_without_suggestions() {
        let json = r#"{
            "ai_message": "Lakers look strong tonight.",
            "timestamp": "2025-01-15T18:00:00Z"
        }"#;
        let reply: ChatReplyDto = serde_json::from_str(json).unwrap();
        assert_eq!(reply.suggested_games.len(), 0);
    }

    #[test]
    fn test_game_pick_wire_shape_and_display() {
        let json = r#"{
            "game_id": "nba_2025_01_15_lakers_celtics",
            "sport": "nba",
            "team_a": "Los Angeles Lakers",
            "team_b": "Boston Celtics",
            "scheduled_date": "2025-01-15",
            "predicted_outcome": "Los Angeles Lakers",
            "confidence": 67,
            "reasoning": ["Stronger recent form", "Home court advantage"]
        }"#;
        let pick: GamePickDto = serde_json::from_str(json).unwrap();
        assert_eq!(pick.confidence_display(), "67%");
        assert_eq!(pick.reasoning_headline(), Some("Stronger recent form"));
        assert_eq!(pick.matchup(), "Los Angeles Lakers vs Boston Celtics");
    }
}
