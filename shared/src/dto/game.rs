use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Data Transfer Object for a scheduled or completed game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameDto {
    /// Backend-assigned game identifier
    pub game_id: String,

    /// Sport tag (e.g. "nba", "nfl"), lowercase on the wire
    pub sport: String,

    /// First participant
    pub team_a: String,

    /// Second participant
    pub team_b: String,

    /// Scheduled date as sent by the backend; a bare date or a full
    /// timestamp depending on the data source
    pub scheduled_date: String,

    /// Final result (winning team name), absent until the game completes
    #[serde(default)]
    pub result: Option<String>,
}

impl GameDto {
    /// "Team A vs Team B" header line
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.team_a, self.team_b)
    }

    pub fn is_completed(&self) -> bool {
        self.result.is_some()
    }

    /// Schedule formatted for display, e.g. "Jan 15, 2025, 07:30 PM"
    pub fn schedule_display(&self) -> String {
        format_schedule(&self.scheduled_date)
    }
}

const SCHEDULE_FORMAT: &str = "%b %-d, %Y, %I:%M %p";
const DATE_FORMAT: &str = "%b %-d, %Y";

/// Formats a backend schedule string as "Jan 15, 2025, 07:30 PM".
///
/// The wire is not strict about schedule shapes: full RFC 3339
/// timestamps, zone-less timestamps, and bare dates all occur. Anything
/// unparseable is returned unchanged rather than erroring.
pub fn format_schedule(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(SCHEDULE_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format(SCHEDULE_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DATE_FORMAT).to_string();
    }
    raw.to_string()
}

/// Date-only variant, e.g. "Jan 15, 2025", used by compact cards.
pub fn format_schedule_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DATE_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format(DATE_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DATE_FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn game(result: Option<&str>) -> GameDto {
        GameDto {
            game_id: "nba_2025_01_15_lakers_celtics".to_string(),
            sport: "nba".to_string(),
            team_a: "Los Angeles Lakers".to_string(),
            team_b: "Boston Celtics".to_string(),
            scheduled_date: "2025-01-15".to_string(),
            result: result.map(str::to_string),
        }
    }

    #[test]
    fn test_game_dto_deserializes_wire_shape() {
        let json = r#"{
            "game_id": "nba_2025_01_15_lakers_celtics",
            "sport": "nba",
            "team_a": "Los Angeles Lakers",
            "team_b": "Boston Celtics",
            "scheduled_date": "2025-01-15",
            "result": null
        }"#;
        let dto: GameDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto, game(None));
        assert!(!dto.is_completed());
    }

    #[test]
    fn test_game_dto_result_marks_completed() {
        let dto = game(Some("Los Angeles Lakers"));
        assert!(dto.is_completed());
        assert_eq!(dto.result.as_deref(), Some("Los Angeles Lakers"));
    }

    #[test]
    fn test_matchup_header() {
        assert_eq!(
            game(None).matchup(),
            "Los Angeles Lakers vs Boston Celtics"
        );
    }

    #[test]
    fn test_format_schedule_shapes() {
        let cases = [
            ("2025-01-15T19:30:00Z", "Jan 15, 2025, 07:30 PM"),
            ("2025-01-15T19:30:00", "Jan 15, 2025, 07:30 PM"),
            ("2025-01-15", "Jan 15, 2025"),
            ("soon", "soon"),
        ];
        for (raw, expected) in cases {
            assert_eq!(format_schedule(raw), expected, "raw: {raw}");
        }
    }

    #[test]
    fn test_format_schedule_date_truncates_time() {
        assert_eq!(format_schedule_date("2025-01-15T19:30:00Z"), "Jan 15, 2025");
        assert_eq!(format_schedule_date("2025-01-15"), "Jan 15, 2025");
        assert_eq!(format_schedule_date("tbd"), "tbd");
    }
}
