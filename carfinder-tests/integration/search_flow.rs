//! Search orchestration against mock provider servers.

use std::time::{Duration, Instant};

use carfinder_core::CarfinderConfig;
use carfinder_search::{SectionStatus, VehicleSearchService};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::{config_for, mount_toyota, service_for, toyota_articles, toyota_photos};

#[tokio::test]
async fn test_toyota_search_fills_all_sections() {
    let server = MockServer::start().await;
    mount_toyota(&server).await;

    let bundle = service_for(&server).orchestrate("  Toyota ").await;

    assert_eq!(bundle.query, "Toyota");
    assert_eq!(bundle.lookup.make, "toyota");
    assert_eq!(bundle.lookup.model, "");

    assert_eq!(bundle.specs.len(), 2);
    assert_eq!(bundle.specs.items()[0].model.as_deref(), Some("camry"));
    assert_eq!(bundle.specs.items()[0].cylinders.as_deref(), Some("4"));
    assert_eq!(bundle.specs.items()[1].class, None);

    // One photo has no URL
    assert_eq!(bundle.images.len(), 3);
    assert_eq!(bundle.images.items()[1].description, "");

    // One article has no title
    assert_eq!(bundle.news.len(), 2);
    assert_eq!(bundle.news.items()[1].title, "Camry sales climb");
    assert_eq!(bundle.news.items()[1].source_name, "Daily");
}

#[tokio::test]
async fn test_outbound_requests_carry_keys_and_normalized_terms() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cars"))
        .and(header("X-Api-Key", "ninjas-key"))
        .and(query_param("make", "volkswagen"))
        .and(query_param("model", "golf gti"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .and(query_param("query", "VW Golf GTI car"))
        .and(query_param("client_id", "unsplash-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .and(query_param("q", "VW Golf GTI"))
        .and(query_param("apiKey", "news-key"))
        .and(query_param("language", "es"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok", "articles": []})))
        .expect(1)
        .mount(&server)
        .await;

    let bundle = service_for(&server).orchestrate("  VW Golf GTI ").await;

    assert!(bundle.is_empty());
    assert_eq!(bundle.specs.status(), SectionStatus::Empty);
    server.verify().await;
}

#[tokio::test]
async fn test_blank_query_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    for query in ["", "   ", "\t\n"] {
        let bundle = service.orchestrate(query).await;
        assert!(bundle.is_empty());
        assert_eq!(bundle.news.status(), SectionStatus::Empty);
    }

    server.verify().await;
}

#[tokio::test]
async fn test_failing_specs_provider_leaves_other_sections_intact() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cars"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(toyota_photos()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(toyota_articles()))
        .mount(&server)
        .await;

    let bundle = service_for(&server).orchestrate("Toyota").await;

    assert!(bundle.specs.is_failed());
    assert_eq!(bundle.specs.status(), SectionStatus::Unavailable);
    assert_eq!(bundle.images.len(), 3);
    assert_eq!(bundle.news.len(), 2);
}

#[tokio::test]
async fn test_malformed_bodies_become_failed_sections() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cars"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"status": "error", "code": "rateLimited", "articles": []}),
        ))
        .mount(&server)
        .await;

    let bundle = service_for(&server).orchestrate("Toyota").await;

    assert!(bundle.specs.is_failed());
    assert!(bundle.images.is_failed());
    assert!(bundle.news.is_failed());
    assert!(bundle.is_empty());
}

#[tokio::test]
async fn test_lookups_run_concurrently() {
    let server = MockServer::start().await;
    let delay = Duration::from_millis(400);

    Mock::given(method("GET"))
        .and(path("/v1/cars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])).set_delay(delay))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"results": []}))
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ok", "articles": []}))
                .set_delay(delay),
        )
        .mount(&server)
        .await;

    let service = service_for(&server);
    let started = Instant::now();
    let bundle = service.orchestrate("Toyota").await;
    let elapsed = started.elapsed();

    assert!(bundle.is_empty());
    assert!(!bundle.specs.is_failed());
    assert!(elapsed < delay * 3, "lookups ran sequentially: {elapsed:?}");
}

#[tokio::test]
async fn test_missing_keys_disable_providers_without_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let config = CarfinderConfig::from_lookup(|key| match key {
        "CARFINDER_SPECS_URL" | "CARFINDER_IMAGES_URL" | "CARFINDER_NEWS_URL" => Some(uri.clone()),
        "NEWS_KEY" => Some("   ".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.credentials.missing().len(), 3);

    let service = VehicleSearchService::from_config(&config).unwrap();
    let bundle = service.orchestrate("Toyota").await;

    assert!(bundle.specs.is_failed());
    assert!(bundle.images.is_failed());
    assert!(bundle.news.is_failed());
    server.verify().await;
}

#[tokio::test]
async fn test_repeated_search_gives_identical_bundles() {
    let server = MockServer::start().await;
    mount_toyota(&server).await;

    let config = config_for(&server);
    let service = VehicleSearchService::from_config(&config).unwrap();
    let first = service.orchestrate("Toyota").await;
    let second = service.orchestrate("toyota").await;

    assert_eq!(first.lookup, second.lookup);
    assert_eq!(first.specs, second.specs);
    assert_eq!(first.images, second.images);
    assert_eq!(first.news, second.news);
}
