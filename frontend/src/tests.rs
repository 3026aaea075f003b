#[cfg(test)]
mod tests {
    use crate::Route;
    use yew_router::Routable;

    #[test]
    fn test_static_routes_recognize_their_paths() {
        let cases = [
            ("/", Route::Home),
            ("/history", Route::History),
            ("/dashboard", Route::Dashboard),
            ("/guru", Route::Guru),
            ("/mines", Route::Mines),
            ("/404", Route::NotFound),
        ];
        for (path, expected) in cases {
            assert_eq!(Route::recognize(path), Some(expected), "path {}", path);
        }
    }

    #[test]
    fn test_game_details_route_carries_the_id() {
        assert_eq!(
            Route::recognize("/game/nba_2025_01_15_lakers_celtics"),
            Some(Route::GameDetails {
                game_id: "nba_2025_01_15_lakers_celtics".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/game"), Some(Route::NotFound));
    }

    #[test]
    fn test_routes_render_back_to_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Mines.to_path(), "/mines");
        assert_eq!(
            Route::GameDetails {
                game_id: "abc".to_string()
            }
            .to_path(),
            "/game/abc"
        );
    }
}
