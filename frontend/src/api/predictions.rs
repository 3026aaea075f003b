use crate::api::{get_json, post_body_expect_ok};
use log::debug;
use shared::{ApiError, PredictionDto, ResultLogDto};
use validator::Validate;

pub async fn get_prediction(game_id: &str) -> Result<PredictionDto, ApiError> {
    debug!("Fetching prediction for game: {}", game_id);
    let prediction: PredictionDto = get_json(&format!("/predict/{}", game_id)).await?;
    debug!(
        "Prediction for {}: {} at {:.0}%",
        game_id,
        prediction.predicted_outcome,
        prediction.confidence * 100.0
    );
    Ok(prediction)
}

/// Records the actual outcome of a finished game. Any 2xx is success; the
/// response body is ignored.
pub async fn log_result(entry: &ResultLogDto) -> Result<(), ApiError> {
    entry.validate()?;
    debug!(
        "Logging result for game {}: {}",
        entry.game_id, entry.actual_outcome
    );
    post_body_expect_ok("/log_result", entry).await
}
