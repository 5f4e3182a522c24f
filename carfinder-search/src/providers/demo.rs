//! Demo provider implementation for development.

use async_trait::async_trait;

use super::{ImageProvider, NewsProvider, SpecProvider};
use crate::errors::ProviderError;
use crate::types::{ImageResult, NewsItem, VehicleSpec};

/// Demo provider for UI development without API keys.
///
/// Answers all three lookups with plausible data derived from the query.
/// No external calls are made.
#[derive(Debug, Default)]
pub struct DemoProvider;

impl DemoProvider {
    /// Creates a new demo provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpecProvider for DemoProvider {
    async fn fetch_specs(
        &self,
        make: &str,
        model: &str,
    ) -> Result<Vec<VehicleSpec>, ProviderError> {
        let model = if model.is_empty() { "demo" } else { model };

        let trim = |year: &str, transmission: &str, city: &str, highway: &str, combined: &str| {
            VehicleSpec {
                class: Some("midsize car".to_string()),
                transmission: Some(transmission.to_string()),
                drive: Some("fwd".to_string()),
                fuel_type: Some("gas".to_string()),
                cylinders: Some("4".to_string()),
                displacement: Some("2.5".to_string()),
                city_mpg: Some(city.to_string()),
                highway_mpg: Some(highway.to_string()),
                combination_mpg: Some(combined.to_string()),
                make: Some(make.to_string()),
                model: Some(model.to_string()),
                year: Some(year.to_string()),
            }
        };

        Ok(vec![
            trim("2022", "a", "28", "39", "32"),
            trim("2023", "m", "27", "38", "31"),
        ])
    }
}

#[async_trait]
impl ImageProvider for DemoProvider {
    async fn fetch_images(&self, query: &str) -> Result<Vec<ImageResult>, ProviderError> {
        let seed = urlencoding::encode(query.trim()).into_owned();

        Ok((1..=3)
            .map(|n| ImageResult {
                url: format!("https://picsum.photos/seed/{seed}-{n}/800/600"),
                description: format!("Demo photo {n} for {}", query.trim()),
            })
            .collect())
    }
}

#[async_trait]
impl NewsProvider for DemoProvider {
    async fn fetch_news(&self, query: &str) -> Result<Vec<NewsItem>, ProviderError> {
        let query = query.trim();
        let slug = urlencoding::encode(query).into_owned();

        Ok(vec![
            NewsItem {
                title: format!("{query}: first drive review"),
                url: format!("https://news.example.com/{slug}/review"),
                source_name: "Demo Motor Weekly".to_string(),
            },
            NewsItem {
                title: format!("{query} recall notice explained"),
                url: format!("https://news.example.com/{slug}/recall"),
                source_name: "Demo Auto News".to_string(),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_data_reflects_query() {
        let provider = DemoProvider::new();

        let specs = provider.fetch_specs("toyota", "camry").await.unwrap();
        assert_eq!(specs.len(), 2);
        assert!(
            specs
                .iter()
                .all(|s| s.make.as_deref() == Some("toyota") && s.model.as_deref() == Some("camry"))
        );

        let images = provider.fetch_images("Toyota Camry").await.unwrap();
        assert_eq!(images.len(), 3);
        assert!(images[0].url.contains("Toyota%20Camry"));

        let news = provider.fetch_news("Toyota Camry").await.unwrap();
        assert!(news[0].title.starts_with("Toyota Camry"));
    }
}
