//! Full request path: router, search service, real providers, mock servers.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use carfinder_web::{AppState, TemplateEngine, build_router};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::{mount_toyota, service_for};

fn app(server: &MockServer, static_dir: &std::path::Path) -> Router {
    let state = AppState::new(service_for(server), TemplateEngine::embedded());
    build_router(state, static_dir)
}

async fn submit(app: Router, body: &'static str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/search")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_results_page_renders_provider_data() {
    let server = MockServer::start().await;
    mount_toyota(&server).await;
    let dir = tempfile::tempdir().unwrap();

    let (status, html) = submit(app(&server, dir.path()), "query=toyota").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Results - Carfinder</title>"));
    assert!(html.contains("Results for <strong>Toyota</strong>"));
    assert_eq!(html.matches(r#"<article class="card spec">"#).count(), 2);
    assert!(html.contains("<li><strong>Class:</strong> midsize car</li>"));
    assert!(html.contains("<li><strong>Class:</strong> -</li>"));
    assert_eq!(html.matches("<img ").count(), 3);
    assert!(html.contains(r#"src="https://images.example.com/4.jpg""#));
    assert_eq!(html.matches(r#"class="card news-item""#).count(), 2);
    assert!(html.contains(r#"href="https://news.example.com/3""#));
    assert!(!html.contains("data-status=\"unavailable\""));
}

#[tokio::test]
async fn test_results_page_survives_total_outage() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let (status, html) = submit(app(&server, dir.path()), "query=toyota+camry").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No specifications found for 'toyota camry'."));
    assert!(html.contains("No images available."));
    assert!(html.contains("No news found for this search."));
    assert_eq!(html.matches(r#"data-status="unavailable""#).count(), 3);
}

#[tokio::test]
async fn test_provider_markup_is_escaped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/cars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"make": "<script>alert(1)</script>", "model": "x"}
        ])))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let (status, html) = submit(app(&server, dir.path()), "query=toyota").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn test_api_reports_section_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/cars"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(crate::support::toyota_photos()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok", "articles": []})))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let response = app(&server, dir.path())
        .oneshot(
            Request::get("/api/search?q=toyota")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["specs"]["status"], "failed");
    assert!(
        json["specs"]["reason"]
            .as_str()
            .unwrap()
            .contains("HTTP 502")
    );
    assert_eq!(json["images"]["status"], "loaded");
    assert_eq!(json["images"]["items"].as_array().unwrap().len(), 3);
    assert_eq!(json["news"]["status"], "loaded");
    assert!(json["news"]["items"].as_array().unwrap().is_empty());
}
