#[cfg(test)]
mod session_flows {
    use std::rc::Rc;

    use frontend::chat::{ChatAction, ChatAuthor, ChatLog, CONNECTIVITY_APOLOGY};
    use frontend::minefield::{BoardAction, BoardPhase, BoardSession};
    use frontend::remote::{RemoteAction, RemoteResource, RemoteState};
    use shared::{ChatReplyDto, GameDto, MinesMoveOutcomeDto, MinesRecommendationsDto, PredictionDto};
    use yew::Reducible;

    fn wire_games(json: &str) -> Vec<GameDto> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_board_session_plays_a_full_round() {
        let session = Rc::new(BoardSession::default()).reduce(BoardAction::Start {
            game_id: "mines_5_1736900000_ab12cd34".to_string(),
            grid_size: 5,
            num_bombs: 3,
        });
        assert_eq!(session.phase, BoardPhase::Active);
        assert_eq!(session.cells.len(), 25);
        assert_eq!(session.stats.bombs_remaining, 3);

        // Safe move at (2, 1), stats taken from the reported outcome.
        let outcome: MinesMoveOutcomeDto = serde_json::from_str(
            r#"{"stats": {"safe_clicks": 1, "bombs_hit": 0, "total_clicks": 1,
                "bombs_remaining": 3, "remaining_safe": 21}}"#,
        )
        .unwrap();
        let session = session.reduce(BoardAction::Move {
            x: 2,
            y: 1,
            safe: true,
            stats: outcome.stats,
        });
        assert_eq!(session.phase, BoardPhase::Active);
        assert!(session.cell_at(2, 1).unwrap().revealed);
        assert!(!session.cell_at(2, 1).unwrap().is_mine);
        assert_eq!(session.stats.safe_clicks, 1);

        // Unsafe move busts the session.
        let outcome: MinesMoveOutcomeDto = serde_json::from_str(
            r#"{"stats": {"safe_clicks": 1, "bombs_hit": 1, "total_clicks": 2,
                "bombs_remaining": 2, "remaining_safe": 21}}"#,
        )
        .unwrap();
        let session = session.reduce(BoardAction::Move {
            x: 0,
            y: 0,
            safe: false,
            stats: outcome.stats.clone(),
        });
        assert_eq!(session.phase, BoardPhase::Busted);
        assert!(session.cell_at(0, 0).unwrap().is_mine);

        // Busted is terminal; further clicks change nothing.
        let after = session.clone().reduce(BoardAction::Move {
            x: 4,
            y: 4,
            safe: true,
            stats: outcome.stats,
        });
        assert_eq!(*after, *session);

        let reset = after.reduce(BoardAction::Reset);
        assert_eq!(reset.phase, BoardPhase::Idle);
        assert!(reset.cells.is_empty());
    }

    #[test]
    fn test_stale_list_response_never_overwrites_the_newer_tab() {
        let nba = wire_games(
            r#"[{"game_id": "nba_1", "sport": "NBA", "team_a": "Lakers",
                "team_b": "Celtics", "scheduled_date": "2025-01-15", "result": null}]"#,
        );
        let nfl = wire_games(
            r#"[{"game_id": "nfl_1", "sport": "NFL", "team_a": "Chiefs",
                "team_b": "Bills", "scheduled_date": "2025-01-19", "result": null}]"#,
        );

        // Two tab switches in quick succession; the first response lands last.
        let resource = Rc::new(RemoteResource::<Vec<GameDto>>::default());
        let resource = resource.reduce(RemoteAction::Begin { ticket: 1 });
        let resource = resource.reduce(RemoteAction::Begin { ticket: 2 });
        let resource = resource.reduce(RemoteAction::Settle {
            ticket: 2,
            outcome: Ok(nfl.clone()),
        });
        let resource = resource.reduce(RemoteAction::Settle {
            ticket: 1,
            outcome: Ok(nba),
        });

        assert_eq!(resource.state, RemoteState::Ready(nfl));
    }

    #[test]
    fn test_chat_round_trip_appends_in_order() {
        let log = Rc::new(ChatLog::seeded());
        assert_eq!(log.messages.len(), 1);
        assert_eq!(log.messages[0].author, ChatAuthor::Guru);

        let log = log.reduce(ChatAction::Send {
            text: "  Who wins tonight?  ".to_string(),
        });
        assert!(log.awaiting_reply);
        assert_eq!(log.messages[1].author, ChatAuthor::User);
        assert_eq!(log.messages[1].text, "Who wins tonight?");

        let reply: ChatReplyDto = serde_json::from_str(
            r#"{
                "ai_message": "Lakers by 6. Their defense has been elite at home.",
                "timestamp": "2025-01-15T18:30:00Z",
                "suggested_games": [{
                    "game_id": "nba_1",
                    "sport": "NBA",
                    "team_a": "Lakers",
                    "team_b": "Celtics",
                    "scheduled_date": "2025-01-15",
                    "predicted_outcome": "Lakers",
                    "confidence": 0.78,
                    "reasoning": ["Home record", "Rest advantage"]
                }]
            }"#,
        )
        .unwrap();
        let log = log.reduce(ChatAction::ReplyArrived {
            text: reply.ai_message,
            sent_at: reply.timestamp,
            picks: reply.suggested_games,
        });

        assert!(!log.awaiting_reply);
        assert_eq!(log.messages.len(), 3);
        assert_eq!(log.messages[2].author, ChatAuthor::Guru);
        assert_eq!(log.messages[2].picks.len(), 1);
        assert_eq!(log.messages[2].picks[0].matchup(), "Lakers vs Celtics");
    }

    #[test]
    fn test_chat_failure_reads_as_a_guru_apology() {
        let log = Rc::new(ChatLog::seeded()).reduce(ChatAction::Send {
            text: "Any NFL picks?".to_string(),
        });
        let log = log.reduce(ChatAction::ReplyFailed);

        assert!(!log.awaiting_reply);
        let last = log.messages.last().unwrap();
        assert_eq!(last.author, ChatAuthor::Guru);
        assert_eq!(last.text, CONNECTIVITY_APOLOGY);
    }

    #[test]
    fn test_recommendation_lists_replace_wholesale() {
        let first: MinesRecommendationsDto = serde_json::from_str(
            r#"{"tiles": [
                {"x": 0, "y": 0, "safe_probability": 0.91, "confidence": 0.8, "recommendation": "SAFE"},
                {"x": 3, "y": 2, "safe_probability": 0.64, "confidence": 0.7, "recommendation": "NEUTRAL"}
            ]}"#,
        )
        .unwrap();
        let second: MinesRecommendationsDto = serde_json::from_str(
            r#"{"tiles": [
                {"x": 4, "y": 4, "safe_probability": 0.88, "confidence": 0.8, "recommendation": "SAFE"}
            ]}"#,
        )
        .unwrap();

        let resource = Rc::new(RemoteResource::<Vec<_>>::default());
        let resource = resource.reduce(RemoteAction::Begin { ticket: 1 });
        let resource = resource.reduce(RemoteAction::Settle {
            ticket: 1,
            outcome: Ok(first.tiles),
        });
        let resource = resource.reduce(RemoteAction::Begin { ticket: 2 });
        let resource = resource.reduce(RemoteAction::Settle {
            ticket: 2,
            outcome: Ok(second.tiles.clone()),
        });

        // No coordinate from the first list survives the refresh.
        assert_eq!(resource.state, RemoteState::Ready(second.tiles));
    }

    #[test]
    fn test_empty_success_is_ready_never_failed() {
        let resource = Rc::new(RemoteResource::<Vec<GameDto>>::default());
        let resource = resource.reduce(RemoteAction::Begin { ticket: 1 });
        let resource = resource.reduce(RemoteAction::Settle {
            ticket: 1,
            outcome: Ok(vec![]),
        });
        // Zero records is the empty-state branch, distinct from a failure.
        assert_eq!(resource.state, RemoteState::Ready(vec![]));

        let resource = resource.reduce(RemoteAction::Begin { ticket: 2 });
        let resource = resource.reduce(RemoteAction::Settle {
            ticket: 2,
            outcome: Err("HTTP error 503".to_string()),
        });
        assert_eq!(resource.state, RemoteState::Failed("HTTP error 503".to_string()));
    }

    #[test]
    fn test_logged_result_shows_after_the_refetch() {
        let before = wire_games(
            r#"[{"game_id": "nba_1", "sport": "NBA", "team_a": "Lakers",
                "team_b": "Celtics", "scheduled_date": "2025-01-15", "result": null}]"#,
        );
        let after = wire_games(
            r#"[{"game_id": "nba_1", "sport": "NBA", "team_a": "Lakers",
                "team_b": "Celtics", "scheduled_date": "2025-01-15",
                "result": "Lakers"}]"#,
        );

        let resource = Rc::new(RemoteResource::<Vec<GameDto>>::default());
        let resource = resource.reduce(RemoteAction::Begin { ticket: 1 });
        let resource = resource.reduce(RemoteAction::Settle {
            ticket: 1,
            outcome: Ok(before),
        });
        // Logging a result re-triggers the fetch; the refreshed list carries it.
        let resource = resource.reduce(RemoteAction::Begin { ticket: 2 });
        let resource = resource.reduce(RemoteAction::Settle {
            ticket: 2,
            outcome: Ok(after),
        });

        let RemoteState::Ready(games) = &resource.state else {
            panic!("expected a settled list");
        };
        let game = &games[0];
        let prediction: PredictionDto = serde_json::from_str(
            r#"{"game_id": "nba_1", "predicted_outcome": "Lakers",
                "confidence": 0.78, "reasons": [], "factor_contributions": {}}"#,
        )
        .unwrap();
        assert_eq!(
            game.result.as_deref(),
            Some(prediction.predicted_outcome.as_str())
        );
    }

    #[test]
    fn test_top_picks_are_the_first_three_in_server_order() {
        let list: MinesRecommendationsDto = serde_json::from_str(
            r#"{"tiles": [
                {"x": 1, "y": 1, "safe_probability": 0.62, "confidence": 0.7, "recommendation": "NEUTRAL"},
                {"x": 0, "y": 3, "safe_probability": 0.95, "confidence": 0.9, "recommendation": "SAFE"},
                {"x": 2, "y": 0, "safe_probability": 0.81, "confidence": 0.8, "recommendation": "SAFE"},
                {"x": 4, "y": 2, "safe_probability": 0.33, "confidence": 0.6, "recommendation": "RISKY"}
            ]}"#,
        )
        .unwrap();

        // Server ranking is authoritative; no client re-sorting by probability.
        let top: Vec<(u32, u32)> = list.tiles.iter().take(3).map(|t| (t.x, t.y)).collect();
        assert_eq!(top, vec![(1, 1), (0, 3), (2, 0)]);
    }

    #[test]
    fn test_history_keeps_only_games_with_results() {
        let games = wire_games(
            r#"[
                {"game_id": "nba_1", "sport": "NBA", "team_a": "Lakers",
                 "team_b": "Celtics", "scheduled_date": "2025-01-10",
                 "result": "Lakers"},
                {"game_id": "nba_2", "sport": "NBA", "team_a": "Warriors",
                 "team_b": "Suns", "scheduled_date": "2025-01-18", "result": null},
                {"game_id": "nfl_1", "sport": "NFL", "team_a": "Chiefs",
                 "team_b": "Bills", "scheduled_date": "2025-01-12",
                 "result": "Bills"}
            ]"#,
        );

        let completed: Vec<&GameDto> = games.iter().filter(|g| g.is_completed()).collect();
        assert_eq!(completed.len(), 2);
        assert!(completed.iter().all(|g| g.result.is_some()));
    }
}
