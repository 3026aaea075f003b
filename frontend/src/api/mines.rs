use crate::api::post_json;
use log::debug;
use shared::{ApiError, MinesMoveOutcomeDto, MinesRecommendationsDto, MinesSessionDto};

pub async fn create_session(grid_size: u32, num_bombs: u32) -> Result<MinesSessionDto, ApiError> {
    debug!(
        "Creating mines session: {}x{} grid, {} bombs requested",
        grid_size, grid_size, num_bombs
    );
    let session: MinesSessionDto = post_json(&format!(
        "/mines/game/create?grid_size={}&num_bombs={}",
        grid_size, num_bombs
    ))
    .await?;
    debug!(
        "Session {} created with {} bombs confirmed",
        session.game_id, session.num_bombs
    );
    Ok(session)
}

/// Reports one tile click. The outcome is drawn client-side for now; the
/// server records it and answers with the authoritative statistics.
pub async fn report_click(
    game_id: &str,
    x: u32,
    y: u32,
    is_safe: bool,
) -> Result<MinesMoveOutcomeDto, ApiError> {
    debug!("Reporting click ({}, {}) safe={}", x, y, is_safe);
    post_json(&format!(
        "/mines/click/{}?x={}&y={}&is_safe={}",
        game_id, x, y, is_safe
    ))
    .await
}

/// Tile recommendations for the current board, ordered best-first by the
/// server.
pub async fn get_recommendations(game_id: &str) -> Result<MinesRecommendationsDto, ApiError> {
    debug!("Fetching tile recommendations for session {}", game_id);
    let recommendations: MinesRecommendationsDto =
        post_json(&format!("/mines/predict/{}", game_id)).await?;
    debug!(
        "Received {} tile recommendations",
        recommendations.tiles.len()
    );
    Ok(recommendations)
}
