use crate::api::get_json;
use log::debug;
use shared::{ApiError, GameDto, GameStatusDto};

/// Builds the list path. "All sports" omits the query entirely; a concrete
/// sport is always URL-encoded.
pub fn games_path(sport: Option<&str>) -> String {
    match sport {
        Some(sport) => format!("/games?sport={}", urlencoding::encode(sport)),
        None => "/games".to_string(),
    }
}

pub async fn get_games() -> Result<Vec<GameDto>, ApiError> {
    debug!("Fetching all games");
    let games: Vec<GameDto> = get_json(&games_path(None)).await?;
    debug!("Successfully fetched {} games", games.len());
    Ok(games)
}

pub async fn get_games_by_sport(sport: &str) -> Result<Vec<GameDto>, ApiError> {
    debug!("Fetching games for sport: {}", sport);
    let games: Vec<GameDto> = get_json(&games_path(Some(sport))).await?;
    debug!("Successfully fetched {} {} games", games.len(), sport);
    Ok(games)
}

/// How a completed game's result was recorded. Best-effort callers treat any
/// failure as "no badge".
pub async fn get_game_status(game_id: &str) -> Result<GameStatusDto, ApiError> {
    debug!("Fetching verification status for game: {}", game_id);
    get_json(&format!("/games/status/{}", game_id)).await
}
