//! Shared fixtures: mock provider servers wired through configuration.

use carfinder_core::CarfinderConfig;
use carfinder_search::VehicleSearchService;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds configuration the way the binary does, pointing every provider
/// at the mock server and supplying all three keys.
pub fn config_for(server: &MockServer) -> CarfinderConfig {
    let uri = server.uri();
    CarfinderConfig::from_lookup(|key| match key {
        "NINJAS_KEY" => Some("ninjas-key".to_string()),
        "UNSPLASH_KEY" => Some("unsplash-key".to_string()),
        "NEWS_KEY" => Some("news-key".to_string()),
        "CARFINDER_SPECS_URL" | "CARFINDER_IMAGES_URL" | "CARFINDER_NEWS_URL" => Some(uri.clone()),
        "CARFINDER_TIMEOUT_SECS" => Some("2".to_string()),
        _ => None,
    })
    .unwrap()
}

pub fn service_for(server: &MockServer) -> VehicleSearchService {
    VehicleSearchService::from_config(&config_for(server)).unwrap()
}

pub fn toyota_specs() -> Value {
    json!([
        {"make": "toyota", "model": "camry", "year": 2020, "class": "midsize car", "cylinders": 4},
        {"make": "toyota", "model": "corolla", "year": 2021, "fuel_type": "gas"}
    ])
}

pub fn toyota_photos() -> Value {
    json!({
        "total": 4,
        "results": [
            {"urls": {"regular": "https://images.example.com/1.jpg"}, "alt_description": "red sedan"},
            {"urls": {"regular": "https://images.example.com/2.jpg"}, "alt_description": null},
            {"urls": {}, "alt_description": "no link"},
            {"urls": {"regular": "https://images.example.com/4.jpg"}}
        ]
    })
}

pub fn toyota_articles() -> Value {
    json!({
        "status": "ok",
        "totalResults": 3,
        "articles": [
            {"title": "Toyota unveils new hybrid", "url": "https://news.example.com/1", "source": {"name": "Motor"}},
            {"url": "https://news.example.com/2", "source": {"name": "Wire"}},
            {"title": "Camry sales climb", "url": "https://news.example.com/3", "source": {"name": "Daily"}}
        ]
    })
}

/// Mounts all three providers answering with the Toyota fixtures.
pub async fn mount_toyota(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/cars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(toyota_specs()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(toyota_photos()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(toyota_articles()))
        .mount(server)
        .await;
}
