// Re-export all API modules
pub mod chat;
pub mod games;
pub mod health;
pub mod insights;
pub mod mines;
pub mod predictions;

use crate::config::Config;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::ApiError;

pub fn api_url(path: &str) -> String {
    let base_url = Config::api_base_url();
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        // Use absolute URL
        format!("{}{}", base_url, path)
    }
}

/// GET `path` and decode the JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST `path` with an empty body and decode the JSON response.
pub(crate) async fn post_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST a JSON `body` to `path` and decode the JSON response.
pub(crate) async fn post_body<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Invalid(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST a JSON `body` to `path`; any 2xx is success and the response body is
/// not read.
pub(crate) async fn post_body_expect_ok<B: Serialize>(
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Invalid(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }
    Ok(())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        // Failed responses are not parsed for detail; the status is the signal.
        return Err(ApiError::Http {
            status: response.status(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[test]
    fn test_api_url_is_relative_without_a_configured_base() {
        assert_eq!(api_url("/games"), "/games");
        assert_eq!(api_url("/mines/predict/abc"), "/mines/predict/abc");
    }
}
