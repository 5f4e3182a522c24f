//! Provider implementations for vehicle data lookups.

use async_trait::async_trait;
use carfinder_core::ProviderConfig;
use serde::de::DeserializeOwned;

use crate::errors::ProviderError;
use crate::types::{ImageResult, NewsItem, ProviderKind, VehicleSpec};

pub mod demo;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod newsapi;
pub mod ninjas;
pub mod unsplash;

pub use demo::DemoProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockProvider;
pub use newsapi::NewsApiProvider;
pub use ninjas::NinjasSpecProvider;
pub use unsplash::UnsplashImageProvider;

/// Longest slice of an error body kept for logs.
const ERROR_DETAIL_LIMIT: usize = 200;

/// Largest response body read from a provider.
pub(crate) const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Trait for vehicle specification providers.
#[async_trait]
pub trait SpecProvider: Send + Sync + std::fmt::Debug {
    /// Looks up trims by make and, when non-empty, model.
    ///
    /// # Errors
    /// - `ProviderError::Unavailable` - Provider answered with a non-success status
    /// - `ProviderError::Network` / `ProviderError::Timeout` - Request did not complete
    /// - `ProviderError::MalformedResponse` - Body was not a JSON array of objects
    /// - `ProviderError::MissingCredential` - No API key configured
    async fn fetch_specs(&self, make: &str, model: &str)
    -> Result<Vec<VehicleSpec>, ProviderError>;
}

/// Trait for image search providers.
#[async_trait]
pub trait ImageProvider: Send + Sync + std::fmt::Debug {
    /// Searches for vehicle photos matching the query.
    ///
    /// # Errors
    /// - `ProviderError::Unavailable` - Provider answered with a non-success status
    /// - `ProviderError::Network` / `ProviderError::Timeout` - Request did not complete
    /// - `ProviderError::MalformedResponse` - Body lacked a results array
    /// - `ProviderError::MissingCredential` - No API key configured
    async fn fetch_images(&self, query: &str) -> Result<Vec<ImageResult>, ProviderError>;
}

/// Trait for news search providers.
#[async_trait]
pub trait NewsProvider: Send + Sync + std::fmt::Debug {
    /// Searches for recent articles matching the query.
    ///
    /// # Errors
    /// - `ProviderError::Unavailable` - Provider answered with a non-success status
    /// - `ProviderError::Network` / `ProviderError::Timeout` - Request did not complete
    /// - `ProviderError::MalformedResponse` - Body lacked an articles array
    /// - `ProviderError::MissingCredential` - No API key configured
    async fn fetch_news(&self, query: &str) -> Result<Vec<NewsItem>, ProviderError>;
}

/// Builds the HTTP client shared by one provider's requests.
///
/// # Errors
/// - `ProviderError::ClientBuild` - TLS backend or client settings rejected
pub(crate) fn build_client(config: &ProviderConfig) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .user_agent(config.user_agent)
        .build()
        .map_err(|e| ProviderError::ClientBuild {
            reason: e.to_string(),
        })
}

/// Checks the status of a provider response and decodes its JSON body.
///
/// # Errors
/// - `ProviderError::Unavailable` - Non-success status code
/// - `ProviderError::Network` / `ProviderError::Timeout` - Body could not be read
/// - `ProviderError::MalformedResponse` - Body too large or did not decode into `T`
pub(crate) async fn read_json<T: DeserializeOwned>(
    provider: ProviderKind,
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = read_body(provider, response).await.unwrap_or_default();
        return Err(ProviderError::Unavailable {
            provider,
            status: status.as_u16(),
            detail: truncate_detail(&String::from_utf8_lossy(&body)),
        });
    }

    let body = read_body(provider, response).await?;

    serde_json::from_slice(&body).map_err(|e| ProviderError::MalformedResponse {
        provider,
        reason: e.to_string(),
    })
}

/// Reads the body chunk by chunk, giving up past `MAX_BODY_BYTES`.
async fn read_body(
    provider: ProviderKind,
    mut response: reqwest::Response,
) -> Result<Vec<u8>, ProviderError> {
    let oversized = || ProviderError::MalformedResponse {
        provider,
        reason: format!("body exceeds {MAX_BODY_BYTES} bytes"),
    };

    if response
        .content_length()
        .is_some_and(|len| len > MAX_BODY_BYTES as u64)
    {
        return Err(oversized());
    }

    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| ProviderError::from_request(provider, &e))?
    {
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(oversized());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Decodes each array element on its own, dropping the ones that don't fit.
pub(crate) fn decode_each<T: DeserializeOwned>(items: Vec<serde_json::Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

/// Returns the trimmed value when it is not blank.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn truncate_detail(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(ERROR_DETAIL_LIMIT) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
