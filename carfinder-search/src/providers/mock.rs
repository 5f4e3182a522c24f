//! Mock provider implementation for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{ImageProvider, NewsProvider, SpecProvider};
use crate::errors::ProviderError;
use crate::types::{ImageResult, NewsItem, ProviderKind, VehicleSpec};

/// Scripted provider for testing.
///
/// Each lookup returns a fixed response, optionally after a delay, and
/// counts how often it was called.
#[derive(Debug)]
pub struct MockProvider {
    specs: Result<Vec<VehicleSpec>, ProviderError>,
    images: Result<Vec<ImageResult>, ProviderError>,
    news: Result<Vec<NewsItem>, ProviderError>,
    delay: Option<Duration>,
    spec_calls: AtomicUsize,
    image_calls: AtomicUsize,
    news_calls: AtomicUsize,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Creates a mock that answers every lookup with no items.
    pub fn new() -> Self {
        Self {
            specs: Ok(Vec::new()),
            images: Ok(Vec::new()),
            news: Ok(Vec::new()),
            delay: None,
            spec_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
            news_calls: AtomicUsize::new(0),
        }
    }

    /// Answers the specification lookup with these trims.
    pub fn with_specs(mut self, specs: Vec<VehicleSpec>) -> Self {
        self.specs = Ok(specs);
        self
    }

    /// Answers the image lookup with these photos.
    pub fn with_images(mut self, images: Vec<ImageResult>) -> Self {
        self.images = Ok(images);
        self
    }

    /// Answers the news lookup with these articles.
    pub fn with_news(mut self, news: Vec<NewsItem>) -> Self {
        self.news = Ok(news);
        self
    }

    /// Fails the given lookup with an HTTP 500.
    pub fn failing(mut self, provider: ProviderKind) -> Self {
        let error = ProviderError::Unavailable {
            provider,
            status: 500,
            detail: "mock failure".to_string(),
        };
        match provider {
            ProviderKind::Specs => self.specs = Err(error),
            ProviderKind::Images => self.images = Err(error),
            ProviderKind::News => self.news = Err(error),
        }
        self
    }

    /// Delays every lookup by the same amount before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    /// Number of specification lookups made.
    pub fn spec_calls(&self) -> usize {
        self.spec_calls.load(Ordering::SeqCst)
    }

    /// Number of image lookups made.
    pub fn image_calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }

    /// Number of news lookups made.
    pub fn news_calls(&self) -> usize {
        self.news_calls.load(Ordering::SeqCst)
    }

    /// Total lookups made across all three providers.
    pub fn total_calls(&self) -> usize {
        self.spec_calls() + self.image_calls() + self.news_calls()
    }
}

#[async_trait]
impl SpecProvider for MockProvider {
    async fn fetch_specs(
        &self,
        _make: &str,
        _model: &str,
    ) -> Result<Vec<VehicleSpec>, ProviderError> {
        self.spec_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.specs.clone()
    }
}

#[async_trait]
impl ImageProvider for MockProvider {
    async fn fetch_images(&self, _query: &str) -> Result<Vec<ImageResult>, ProviderError> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.images.clone()
    }
}

#[async_trait]
impl NewsProvider for MockProvider {
    async fn fetch_news(&self, _query: &str) -> Result<Vec<NewsItem>, ProviderError> {
        self.news_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.news.clone()
    }
}

/// Sample trims for tests.
pub fn sample_specs(count: usize) -> Vec<VehicleSpec> {
    (0..count)
        .map(|i| VehicleSpec {
            class: Some("midsize car".to_string()),
            make: Some("toyota".to_string()),
            model: Some("camry".to_string()),
            year: Some((2018 + i).to_string()),
            cylinders: Some("4".to_string()),
            ..VehicleSpec::default()
        })
        .collect()
}

/// Sample photos for tests.
pub fn sample_images(count: usize) -> Vec<ImageResult> {
    (0..count)
        .map(|i| ImageResult {
            url: format!("https://images.example.com/car-{i}.jpg"),
            description: format!("Car photo {i}"),
        })
        .collect()
}

/// Sample articles for tests.
pub fn sample_news(count: usize) -> Vec<NewsItem> {
    (0..count)
        .map(|i| NewsItem {
            title: format!("Headline {i}"),
            url: format!("https://news.example.com/{i}"),
            source_name: "Example News".to_string(),
        })
        .collect()
}
