use crate::api::get_json;
use log::debug;
use shared::{ApiError, HealthDto};

/// Backend liveness for the footer badge. Best-effort only.
pub async fn get_health() -> Result<HealthDto, ApiError> {
    debug!("Checking backend health");
    get_json("/health").await
}
