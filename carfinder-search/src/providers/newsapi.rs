//! NewsAPI article search provider.

use async_trait::async_trait;
use carfinder_core::{ApiKey, ProviderConfig};
use serde::Deserialize;
use tracing::debug;

use super::{NewsProvider, build_client, decode_each, non_blank, read_json};
use crate::errors::ProviderError;
use crate::types::{NewsItem, ProviderKind};

/// Searches NewsAPI for recent articles in one language.
#[derive(Debug)]
pub struct NewsApiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<ApiKey>,
    page_size: u32,
    language: String,
}

/// Response from the `everything` endpoint.
#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    status: Option<String>,
    articles: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct NewsArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    source: Option<NewsSource>,
}

#[derive(Debug, Deserialize)]
struct NewsSource {
    #[serde(default)]
    name: Option<String>,
}

impl NewsApiProvider {
    /// Creates the provider from configuration and an optional key.
    ///
    /// # Errors
    /// - `ProviderError::ClientBuild` - HTTP client could not be constructed
    pub fn new(config: &ProviderConfig, api_key: Option<ApiKey>) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.news_base_url.trim_end_matches('/').to_string(),
            api_key,
            page_size: config.news_page_size,
            language: config.news_language.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v2/everything", self.base_url)
    }

    /// Keeps only articles carrying a title, a link and a source name.
    fn into_item(article: NewsArticle) -> Option<NewsItem> {
        Some(NewsItem {
            title: non_blank(article.title)?,
            url: non_blank(article.url)?,
            source_name: non_blank(article.source.and_then(|s| s.name))?,
        })
    }
}

#[async_trait]
impl NewsProvider for NewsApiProvider {
    async fn fetch_news(&self, query: &str) -> Result<Vec<NewsItem>, ProviderError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(ProviderError::MissingCredential {
                provider: ProviderKind::News,
            })?;

        let page_size = self.page_size.to_string();
        let params = [
            ("q", query.trim()),
            ("language", self.language.as_str()),
            ("pageSize", page_size.as_str()),
            ("apiKey", api_key.expose()),
        ];

        debug!(query, language = %self.language, page_size = self.page_size, "Requesting vehicle news");

        let response = self
            .client
            .get(self.endpoint())
            .query(&params)
            .send()
            .await
            .map_err(|e| ProviderError::from_request(ProviderKind::News, &e))?;

        let body: NewsApiResponse = read_json(ProviderKind::News, response).await?;

        if let Some(status) = body.status.as_deref().filter(|s| *s != "ok") {
            return Err(ProviderError::MalformedResponse {
                provider: ProviderKind::News,
                reason: format!("status '{status}'"),
            });
        }

        Ok(decode_each::<NewsArticle>(body.articles)
            .into_iter()
            .filter_map(Self::into_item)
            .collect())
    }
}
