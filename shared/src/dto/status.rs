use serde::{Deserialize, Serialize};

/// How a completed game's result entered the system
pub const VERIFICATION_AUTO: &str = "auto";

/// Data Transfer Object for a game's result-verification status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameStatusDto {
    /// "auto" when the result fetcher verified it against live scores,
    /// "manual" when a user logged it
    pub verification_type: String,
}

impl GameStatusDto {
    pub fn is_auto_verified(&self) -> bool {
        self.verification_type == VERIFICATION_AUTO
    }

    /// Badge label for the detail page
    pub fn badge_label(&self) -> &'static str {
        if self.is_auto_verified() {
            "Auto-verified"
        } else {
            "Manually logged"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_verification_badge_labels() {
        let auto = GameStatusDto {
            verification_type: "auto".to_string(),
        };
        let manual = GameStatusDto {
            verification_type: "manual".to_string(),
        };
        assert_eq!(auto.badge_label(), "Auto-verified");
        assert_eq!(manual.badge_label(), "Manually logged");
    }

    #[test]
    fn test_status_deserializes_wire_shape() {
        let dto: GameStatusDto = serde_json::from_str(r#"{"verification_type": "auto"}"#).unwrap();
        assert!(dto.is_auto_verified());
    }
}
