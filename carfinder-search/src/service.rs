//! Vehicle search orchestration
//!
//! Takes one raw user query, derives what each provider needs from it,
//! runs the three lookups side by side and folds every outcome, including
//! failures, into a single `ResultBundle`.

use std::sync::Arc;

use carfinder_core::{CarfinderConfig, VehicleQuery, normalize};
use tracing::{debug, info, warn};

use crate::errors::ProviderError;
use crate::providers::{
    DemoProvider, ImageProvider, NewsApiProvider, NewsProvider, NinjasSpecProvider, SpecProvider,
    UnsplashImageProvider,
};
use crate::types::{ImageResult, NewsItem, ProviderKind, ResultBundle, SectionOutcome, VehicleSpec};

/// Vehicle search service combining specification, image and news lookups.
///
/// Cheap to clone; providers are shared behind `Arc`.
#[derive(Debug, Clone)]
pub struct VehicleSearchService {
    specs: Arc<dyn SpecProvider>,
    images: Arc<dyn ImageProvider>,
    news: Arc<dyn NewsProvider>,
}

impl VehicleSearchService {
    /// Creates a service from three independent providers.
    pub fn new(
        specs: Arc<dyn SpecProvider>,
        images: Arc<dyn ImageProvider>,
        news: Arc<dyn NewsProvider>,
    ) -> Self {
        Self {
            specs,
            images,
            news,
        }
    }

    /// Creates a service backed by the real HTTP providers.
    ///
    /// Providers without a credential stay in place and report
    /// `MissingCredential` on every lookup.
    ///
    /// # Errors
    /// - `ProviderError::ClientBuild` - An HTTP client could not be constructed
    pub fn from_config(config: &CarfinderConfig) -> Result<Self, ProviderError> {
        let providers = &config.providers;
        let credentials = &config.credentials;

        for missing in credentials.missing() {
            warn!("{missing} is not set; that section will always be empty");
        }

        Ok(Self::new(
            Arc::new(NinjasSpecProvider::new(
                providers,
                credentials.specs.clone(),
            )?),
            Arc::new(UnsplashImageProvider::new(
                providers,
                credentials.images.clone(),
            )?),
            Arc::new(NewsApiProvider::new(providers, credentials.news.clone())?),
        ))
    }

    /// Creates a service with demo data for development.
    ///
    /// Makes no external calls and needs no credentials.
    pub fn new_demo() -> Self {
        Self::with_provider(Arc::new(DemoProvider::new()))
    }

    /// Creates a service where one value answers all three lookups.
    pub fn with_provider<P>(provider: Arc<P>) -> Self
    where
        P: SpecProvider + ImageProvider + NewsProvider + 'static,
    {
        Self::new(provider.clone(), provider.clone(), provider)
    }

    /// Looks up vehicle trims for normalized make/model keys.
    ///
    /// An empty make short-circuits to an empty section without a call.
    /// Failures are logged and come back as a failed section.
    pub async fn fetch_specs(&self, query: &VehicleQuery) -> SectionOutcome<VehicleSpec> {
        if query.is_empty() {
            return SectionOutcome::empty();
        }

        let result = self.specs.fetch_specs(&query.make, &query.model).await;
        into_section(ProviderKind::Specs, result)
    }

    /// Searches for vehicle photos with the query as typed.
    ///
    /// A blank query short-circuits to an empty section without a call.
    pub async fn fetch_images(&self, query: &str) -> SectionOutcome<ImageResult> {
        let query = query.trim();
        if query.is_empty() {
            return SectionOutcome::empty();
        }

        let result = self.images.fetch_images(query).await;
        into_section(ProviderKind::Images, result)
    }

    /// Searches for recent articles with the query as typed.
    ///
    /// A blank query short-circuits to an empty section without a call.
    pub async fn fetch_news(&self, query: &str) -> SectionOutcome<NewsItem> {
        let query = query.trim();
        if query.is_empty() {
            return SectionOutcome::empty();
        }

        let result = self.news.fetch_news(query).await;
        into_section(ProviderKind::News, result)
    }

    /// Runs all three lookups for a raw query and bundles the outcomes.
    ///
    /// Specifications use the normalized make/model; images and news use
    /// the trimmed query. The lookups run concurrently and never affect
    /// each other. Never fails.
    pub async fn orchestrate(&self, raw_query: &str) -> ResultBundle {
        let query = raw_query.trim();
        let lookup = normalize(query);

        if lookup.is_empty() {
            debug!("Empty query; skipping provider lookups");
            return ResultBundle::empty(query);
        }

        let (specs, images, news) = tokio::join!(
            self.fetch_specs(&lookup),
            self.fetch_images(query),
            self.fetch_news(query),
        );

        info!(
            query,
            make = %lookup.make,
            model = %lookup.model,
            specs = specs.len(),
            images = images.len(),
            news = news.len(),
            "Vehicle search completed"
        );

        ResultBundle {
            query: query.to_string(),
            lookup,
            specs,
            images,
            news,
        }
    }
}

impl Default for VehicleSearchService {
    fn default() -> Self {
        Self::new_demo()
    }
}

/// Absorbs a provider result into a section, logging failures.
fn into_section<T>(
    provider: ProviderKind,
    result: Result<Vec<T>, ProviderError>,
) -> SectionOutcome<T> {
    match result {
        Ok(items) => SectionOutcome::loaded(items),
        Err(e) => {
            warn!(provider = %provider, error = %e, "Provider lookup failed");
            SectionOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::providers::MockProvider;
    use crate::providers::mock::{sample_images, sample_news, sample_specs};
    use crate::types::SectionStatus;

    fn service_with(mock: MockProvider) -> (VehicleSearchService, Arc<MockProvider>) {
        let mock = Arc::new(mock);
        (VehicleSearchService::with_provider(mock.clone()), mock)
    }

    #[tokio::test]
    async fn test_empty_query_makes_no_calls() {
        let (service, mock) = service_with(
            MockProvider::new()
                .with_specs(sample_specs(2))
                .with_images(sample_images(2))
                .with_news(sample_news(2)),
        );

        for raw in ["", "   ", "\t\n"] {
            let bundle = service.orchestrate(raw).await;
            assert!(bundle.is_empty());
            assert_eq!(bundle.specs.status(), SectionStatus::Empty);
            assert_eq!(bundle.images.status(), SectionStatus::Empty);
            assert_eq!(bundle.news.status(), SectionStatus::Empty);
        }

        assert_eq!(mock.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_each_section_filled_from_its_provider() {
        let (service, mock) = service_with(
            MockProvider::new()
                .with_specs(sample_specs(2))
                .with_images(sample_images(4))
                .with_news(sample_news(3)),
        );

        let bundle = service.orchestrate("  Toyota ").await;

        assert_eq!(bundle.query, "Toyota");
        assert_eq!(bundle.lookup.make, "toyota");
        assert_eq!(bundle.specs.len(), 2);
        assert_eq!(bundle.images.len(), 4);
        assert_eq!(bundle.news.len(), 3);
        assert_eq!(mock.spec_calls(), 1);
        assert_eq!(mock.image_calls(), 1);
        assert_eq!(mock.news_calls(), 1);
    }

    #[tokio::test]
    async fn test_spec_failure_does_not_affect_other_sections() {
        let (service, _mock) = service_with(
            MockProvider::new()
                .failing(ProviderKind::Specs)
                .with_images(sample_images(2))
                .with_news(sample_news(1)),
        );

        let bundle = service.orchestrate("toyota").await;

        assert!(bundle.specs.is_failed());
        assert!(bundle.specs.items().is_empty());
        assert_eq!(bundle.images.len(), 2);
        assert_eq!(bundle.news.len(), 1);
    }

    #[tokio::test]
    async fn test_all_providers_failing_still_yields_bundle() {
        let (service, _mock) = service_with(
            MockProvider::new()
                .failing(ProviderKind::Specs)
                .failing(ProviderKind::Images)
                .failing(ProviderKind::News),
        );

        let bundle = service.orchestrate("tesla model 3").await;

        assert!(bundle.is_empty());
        assert!(bundle.specs.is_failed());
        assert!(bundle.images.is_failed());
        assert!(bundle.news.is_failed());
    }

    #[tokio::test]
    async fn test_failure_distinguished_from_no_matches() {
        let (service, _mock) = service_with(MockProvider::new().failing(ProviderKind::News));

        let bundle = service.orchestrate("toyota").await;

        assert_eq!(bundle.specs.status(), SectionStatus::Empty);
        assert_eq!(bundle.news.status(), SectionStatus::Unavailable);
    }

    #[tokio::test]
    async fn test_lookups_run_concurrently() {
        let delay = Duration::from_millis(300);
        let (service, mock) = service_with(
            MockProvider::new()
                .with_specs(sample_specs(1))
                .with_images(sample_images(1))
                .with_news(sample_news(1))
                .with_delay(delay),
        );

        let started = Instant::now();
        let bundle = service.orchestrate("toyota").await;
        let elapsed = started.elapsed();

        // Three sequential lookups would take at least 3 * delay
        assert!(elapsed >= delay);
        assert!(elapsed < delay * 2, "lookups ran sequentially: {elapsed:?}");
        assert_eq!(bundle.specs.len(), 1);
        assert_eq!(bundle.images.len(), 1);
        assert_eq!(mock.total_calls(), 3);
    }

    #[tokio::test]
    async fn test_orchestrate_is_idempotent() {
        let (service, _mock) = service_with(
            MockProvider::new()
                .with_specs(sample_specs(2))
                .failing(ProviderKind::Images)
                .with_news(sample_news(2)),
        );

        let first = service.orchestrate("VW Golf").await;
        let second = service.orchestrate("VW Golf").await;

        assert_eq!(first, second);
        assert_eq!(first.lookup.make, "volkswagen");
        assert_eq!(first.lookup.model, "golf");
    }

    #[tokio::test]
    async fn test_individual_fetches_short_circuit_on_blank_input() {
        let (service, mock) = service_with(MockProvider::new().with_images(sample_images(1)));

        assert!(service.fetch_images("  ").await.is_empty());
        assert!(service.fetch_news("").await.is_empty());
        assert!(service.fetch_specs(&VehicleQuery::default()).await.is_empty());
        assert_eq!(mock.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_demo_service_fills_every_section() {
        let service = VehicleSearchService::new_demo();
        let bundle = service.orchestrate("Toyota Camry").await;

        assert_eq!(bundle.specs.status(), SectionStatus::Found);
        assert_eq!(bundle.images.status(), SectionStatus::Found);
        assert_eq!(bundle.news.status(), SectionStatus::Found);
    }

    #[tokio::test]
    async fn test_from_config_without_keys_reports_missing_credentials() {
        let config = CarfinderConfig::default();
        let service = VehicleSearchService::from_config(&config).unwrap();

        let bundle = service.orchestrate("toyota").await;

        assert!(bundle.specs.is_failed());
        assert!(bundle.images.is_failed());
        assert!(bundle.news.is_failed());
    }
}
