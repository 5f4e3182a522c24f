//! Unsplash photo search provider.

use async_trait::async_trait;
use carfinder_core::{ApiKey, ProviderConfig};
use serde::Deserialize;
use tracing::debug;

use super::{ImageProvider, build_client, decode_each, non_blank, read_json};
use crate::errors::ProviderError;
use crate::types::{ImageResult, ProviderKind};

/// Searches Unsplash for vehicle photos.
#[derive(Debug)]
pub struct UnsplashImageProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<ApiKey>,
    page_size: u32,
    qualifier: &'static str,
}

/// Response from the photo search endpoint.
#[derive(Debug, Deserialize)]
struct UnsplashSearchResponse {
    results: Vec<serde_json::Value>,
}

/// Single photo from the search results.
#[derive(Debug, Deserialize)]
struct UnsplashPhoto {
    #[serde(default)]
    urls: Option<UnsplashUrls>,
    /// Kept raw so a non-text caption never costs the photo
    #[serde(default)]
    alt_description: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct UnsplashUrls {
    #[serde(default)]
    regular: Option<String>,
}

impl UnsplashImageProvider {
    /// Creates the provider from configuration and an optional key.
    ///
    /// # Errors
    /// - `ProviderError::ClientBuild` - HTTP client could not be constructed
    pub fn new(config: &ProviderConfig, api_key: Option<ApiKey>) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.images_base_url.trim_end_matches('/').to_string(),
            api_key,
            page_size: config.image_page_size,
            qualifier: config.image_qualifier,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/search/photos", self.base_url)
    }

    /// Search term sent to the provider: the query biased toward vehicles.
    fn search_term(&self, query: &str) -> String {
        format!("{} {}", query.trim(), self.qualifier)
    }

    /// Keeps only photos that expose a usable image URL.
    fn into_image(photo: UnsplashPhoto) -> Option<ImageResult> {
        let url = non_blank(photo.urls.and_then(|urls| urls.regular))?;
        Some(ImageResult {
            url,
            description: photo
                .alt_description
                .as_ref()
                .and_then(serde_json::Value::as_str)
                .map(|text| text.trim().to_string())
                .unwrap_or_default(),
        })
    }
}

#[async_trait]
impl ImageProvider for UnsplashImageProvider {
    async fn fetch_images(&self, query: &str) -> Result<Vec<ImageResult>, ProviderError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(ProviderError::MissingCredential {
                provider: ProviderKind::Images,
            })?;

        let term = self.search_term(query);
        let page_size = self.page_size.to_string();
        let params = [
            ("query", term.as_str()),
            ("per_page", page_size.as_str()),
            ("client_id", api_key.expose()),
        ];

        debug!(term = %term, per_page = self.page_size, "Requesting vehicle images");

        let response = self
            .client
            .get(self.endpoint())
            .query(&params)
            .send()
            .await
            .map_err(|e| ProviderError::from_request(ProviderKind::Images, &e))?;

        let body: UnsplashSearchResponse = read_json(ProviderKind::Images, response).await?;

        Ok(decode_each::<UnsplashPhoto>(body.results)
            .into_iter()
            .filter_map(Self::into_image)
            .collect())
    }
}
