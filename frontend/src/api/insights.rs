use crate::api::get_json;
use log::debug;
use shared::{AnalyticsDto, ApiError, FactorDto};

pub async fn get_analytics() -> Result<AnalyticsDto, ApiError> {
    debug!("Fetching prediction analytics");
    let analytics: AnalyticsDto = get_json("/analytics").await?;
    debug!(
        "Analytics: {}/{} correct",
        analytics.correct_predictions, analytics.total_predictions
    );
    Ok(analytics)
}

pub async fn get_factors() -> Result<Vec<FactorDto>, ApiError> {
    debug!("Fetching model factors");
    let factors: Vec<FactorDto> = get_json("/factors").await?;
    debug!("Successfully fetched {} factors", factors.len());
    Ok(factors)
}
