use serde::{Deserialize, Serialize};

/// Data Transfer Object for the backend health probe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthDto {
    pub status: String,
    pub service: String,
}

impl HealthDto {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_wire_shape() {
        let json = r#"{"status": "healthy", "service": "sports-prediction-api"}"#;
        let dto: HealthDto = serde_json::from_str(json).unwrap();
        assert!(dto.is_healthy());
    }
}
