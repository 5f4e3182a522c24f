//! API Ninjas vehicle specification provider.

use async_trait::async_trait;
use carfinder_core::{ApiKey, ProviderConfig};
use tracing::debug;

use super::{SpecProvider, build_client, read_json};
use crate::errors::ProviderError;
use crate::types::{ProviderKind, VehicleSpec};

/// Looks up vehicle trims through the API Ninjas cars endpoint.
///
/// The key travels in the `X-Api-Key` header; make and model go in the
/// query string.
#[derive(Debug)]
pub struct NinjasSpecProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<ApiKey>,
}

impl NinjasSpecProvider {
    /// Creates the provider from configuration and an optional key.
    ///
    /// # Errors
    /// - `ProviderError::ClientBuild` - HTTP client could not be constructed
    pub fn new(config: &ProviderConfig, api_key: Option<ApiKey>) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.specs_base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/cars", self.base_url)
    }
}

#[async_trait]
impl SpecProvider for NinjasSpecProvider {
    async fn fetch_specs(
        &self,
        make: &str,
        model: &str,
    ) -> Result<Vec<VehicleSpec>, ProviderError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(ProviderError::MissingCredential {
                provider: ProviderKind::Specs,
            })?;

        let mut params = vec![("make", make)];
        if !model.is_empty() {
            params.push(("model", model));
        }

        debug!(make, model, "Requesting vehicle specifications");

        let response = self
            .client
            .get(self.endpoint())
            .header("X-Api-Key", api_key.expose())
            .query(&params)
            .send()
            .await
            .map_err(|e| ProviderError::from_request(ProviderKind::Specs, &e))?;

        read_json(ProviderKind::Specs, response).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn provider(server: &MockServer, key: Option<&str>) -> NinjasSpecProvider {
        let config = ProviderConfig::with_base_url(&server.uri());
        NinjasSpecProvider::new(&config, key.and_then(ApiKey::new)).unwrap()
    }

    #[tokio::test]
    async fn test_sends_key_header_and_escaped_params() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/cars"))
            .and(header("X-Api-Key", "test-key"))
            .and(query_param("make", "land"))
            .and(query_param("model", "rover defender"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"make": "land rover", "model": "defender", "year": 2021}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let specs = provider(&server, Some("test-key"))
            .fetch_specs("land", "rover defender")
            .await
            .unwrap();

        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].year.as_deref(), Some("2021"));
    }

    #[tokio::test]
    async fn test_model_param_omitted_when_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/cars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let specs = provider(&server, Some("test-key"))
            .fetch_specs("toyota", "")
            .await
            .unwrap();
        assert!(specs.is_empty());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let keys: Vec<String> = requests[0]
            .url
            .query_pairs()
            .map(|(k, _)| k.into_owned())
            .collect();
        assert_eq!(keys, vec!["make".to_string()]);
    }

    #[tokio::test]
    async fn test_returns_matches_verbatim_in_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/cars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"make": "toyota", "model": "camry", "year": 2019, "class": "midsize car"},
                {"make": "toyota", "model": "corolla", "year": 2020},
                {}
            ])))
            .mount(&server)
            .await;

        let specs = provider(&server, Some("k"))
            .fetch_specs("toyota", "")
            .await
            .unwrap();

        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].model.as_deref(), Some("camry"));
        assert_eq!(specs[1].model.as_deref(), Some("corolla"));
        assert_eq!(specs[2], VehicleSpec::default());
    }

    #[tokio::test]
    async fn test_non_success_status_is_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/cars"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Invalid API Key."))
            .mount(&server)
            .await;

        let err = provider(&server, Some("bad"))
            .fetch_specs("toyota", "")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ProviderError::Unavailable {
                provider: ProviderKind::Specs,
                status: 400,
                detail: "Invalid API Key.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/cars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "nope"})))
            .mount(&server)
            .await;

        let err = provider(&server, Some("k"))
            .fetch_specs("toyota", "")
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let err = provider(&server, None)
            .fetch_specs("toyota", "")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ProviderError::MissingCredential {
                provider: ProviderKind::Specs
            }
        );
    }

    #[tokio::test]
    async fn test_slow_provider_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let mut config = ProviderConfig::with_base_url(&server.uri());
        config.request_timeout = Duration::from_millis(200);
        let provider = NinjasSpecProvider::new(&config, ApiKey::new("k")).unwrap();

        let err = provider.fetch_specs("toyota", "").await.unwrap_err();
        assert_eq!(
            err,
            ProviderError::Timeout {
                provider: ProviderKind::Specs
            }
        );
    }
}
