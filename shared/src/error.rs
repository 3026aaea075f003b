use thiserror::Error;
use validator::ValidationErrors;

/// Failure taxonomy for backend calls. `Display` is the text shown in
/// error panels, so variants carry user-readable phrasing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("Request failed with status {status}")]
    Http { status: u16 },

    #[error("Network error: {0}. Make sure the backend is running.")]
    Network(String),

    #[error("Unexpected response from the backend: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    Invalid(String),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Invalid(errors.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_network_error_names_likely_cause() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Network error: connection refused. Make sure the backend is running."
        );
    }

    #[test]
    fn test_http_error_carries_status() {
        let err = ApiError::Http { status: 503 };
        assert_eq!(err.to_string(), "Request failed with status 503");
    }
}
