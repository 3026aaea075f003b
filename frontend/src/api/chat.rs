use crate::api::{get_json, post_body};
use log::debug;
use shared::{ApiError, ChatReplyDto, ChatRequestDto, GamePickDto};
use validator::Validate;

pub async fn send_message(request: &ChatRequestDto) -> Result<ChatReplyDto, ApiError> {
    request.validate()?;
    debug!("Sending chat message ({} chars)", request.message.len());
    let reply: ChatReplyDto = post_body("/chat", request).await?;
    debug!(
        "Guru replied with {} suggested games",
        reply.suggested_games.len()
    );
    Ok(reply)
}

/// Today's most confident picks. Best-effort callers render nothing on
/// failure.
pub async fn get_popular_games() -> Result<Vec<GamePickDto>, ApiError> {
    debug!("Fetching popular games");
    let picks: Vec<GamePickDto> = get_json("/chat/popular-games").await?;
    debug!("Successfully fetched {} popular games", picks.len());
    Ok(picks)
}
