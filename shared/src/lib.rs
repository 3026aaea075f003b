pub mod dto {
    pub mod analytics;
    pub mod chat;
    pub mod factor;
    pub mod game;
    pub mod health;
    pub mod mines;
    pub mod prediction;
    pub mod status;
}

pub mod error;

// Re-export commonly used items
pub use error::{ApiError, Result};

// Re-export DTOs and display helpers
pub use dto::{
    analytics::{AnalyticsDto, ResultLogDto},
    chat::{ChatReplyDto, ChatRequestDto, GamePickDto, ANONYMOUS_USER},
    factor::{weight_change_percent, FactorDto},
    game::{format_schedule, format_schedule_date, GameDto},
    health::HealthDto,
    mines::{
        MinesMoveOutcomeDto, MinesRecommendationsDto, MinesSessionDto, MinesStatsDto,
        TileRecommendationDto, LIKELY_MINE_THRESHOLD, LIKELY_SAFE_THRESHOLD,
    },
    prediction::{confidence_percent, ContributionPair, PredictionDto, BAR_FLOOR_PERCENT},
    status::{GameStatusDto, VERIFICATION_AUTO},
};
