//! Centralized configuration for Carfinder.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase. Configuration is
//! assembled once at startup and handed to the components that need it.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::{ConfigError, Result};

/// API key for the specification provider.
pub const NINJAS_KEY_VAR: &str = "NINJAS_KEY";
/// API key for the image provider.
pub const UNSPLASH_KEY_VAR: &str = "UNSPLASH_KEY";
/// API key for the news provider.
pub const NEWS_KEY_VAR: &str = "NEWS_KEY";

const SPECS_URL_VAR: &str = "CARFINDER_SPECS_URL";
const IMAGES_URL_VAR: &str = "CARFINDER_IMAGES_URL";
const NEWS_URL_VAR: &str = "CARFINDER_NEWS_URL";
const TIMEOUT_VAR: &str = "CARFINDER_TIMEOUT_SECS";
const IMAGE_PAGE_SIZE_VAR: &str = "CARFINDER_IMAGE_PAGE_SIZE";
const NEWS_PAGE_SIZE_VAR: &str = "CARFINDER_NEWS_PAGE_SIZE";
const NEWS_LANGUAGE_VAR: &str = "CARFINDER_NEWS_LANGUAGE";
const HOST_VAR: &str = "CARFINDER_HOST";
const PORT_VAR: &str = "CARFINDER_PORT";
const STATIC_DIR_VAR: &str = "CARFINDER_STATIC_DIR";
const TEMPLATES_DIR_VAR: &str = "CARFINDER_TEMPLATES_DIR";

/// Central configuration for all Carfinder components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct CarfinderConfig {
    pub server: ServerConfig,
    pub providers: ProviderConfig,
    pub credentials: ApiCredentials,
}

/// HTTP server binding and asset locations.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory served read-only under `/static`
    pub static_dir: PathBuf,
    /// Directory holding `base.html`; the embedded layout is used when unset
    pub templates_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: PathBuf::from("carfinder-web/static"),
            templates_dir: None,
        }
    }
}

impl ServerConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Outbound provider endpoints and request bounds.
///
/// Controls where each provider is reached, how long a single request may
/// take, and how many items are requested per page.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the vehicle specification API
    pub specs_base_url: String,
    /// Base URL of the image search API
    pub images_base_url: String,
    /// Base URL of the news search API
    pub news_base_url: String,
    /// Timeout applied to each outbound request
    pub request_timeout: Duration,
    /// Number of images requested per search
    pub image_page_size: u32,
    /// Number of articles requested per search
    pub news_page_size: u32,
    /// Language filter for news articles
    pub news_language: String,
    /// Term appended to image searches to bias results toward vehicles
    pub image_qualifier: &'static str,
    /// User agent for outbound HTTP requests
    pub user_agent: &'static str,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            specs_base_url: "https://api.api-ninjas.com".to_string(),
            images_base_url: "https://api.unsplash.com".to_string(),
            news_base_url: "https://newsapi.org".to_string(),
            request_timeout: Duration::from_secs(8),
            image_page_size: 6,
            news_page_size: 5,
            news_language: "es".to_string(),
            image_qualifier: "car",
            user_agent: "carfinder/0.1.0",
        }
    }
}

impl ProviderConfig {
    /// Creates a configuration pointing every provider at one base URL.
    ///
    /// Used by tests that stand up a single mock server for all providers.
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            specs_base_url: base_url.clone(),
            images_base_url: base_url.clone(),
            news_base_url: base_url,
            ..Self::default()
        }
    }
}

/// Secret provider credential.
///
/// Debug output is redacted so keys never reach logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a credential, treating blank values as absent.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Raw key for placing into a request.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Credentials for the three providers. None disables a provider.
#[derive(Debug, Clone, Default)]
pub struct ApiCredentials {
    pub specs: Option<ApiKey>,
    pub images: Option<ApiKey>,
    pub news: Option<ApiKey>,
}

impl ApiCredentials {
    /// Environment variable names whose credential is not configured.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.specs.is_none() {
            missing.push(NINJAS_KEY_VAR);
        }
        if self.images.is_none() {
            missing.push(UNSPLASH_KEY_VAR);
        }
        if self.news.is_none() {
            missing.push(NEWS_KEY_VAR);
        }
        missing
    }
}

impl CarfinderConfig {
    /// Builds configuration from the process environment.
    ///
    /// # Errors
    /// - `ConfigError::InvalidValue` - A numeric variable could not be parsed
    /// - `ConfigError::InvalidUrl` - A base URL override is not absolute http(s)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults. Credentials have no defaults.
    ///
    /// # Errors
    /// - `ConfigError::InvalidValue` - A numeric variable could not be parsed
    /// - `ConfigError::InvalidUrl` - A base URL override is not absolute http(s)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.credentials = ApiCredentials {
            specs: lookup(NINJAS_KEY_VAR).and_then(ApiKey::new),
            images: lookup(UNSPLASH_KEY_VAR).and_then(ApiKey::new),
            news: lookup(NEWS_KEY_VAR).and_then(ApiKey::new),
        };

        let providers = &mut config.providers;
        if let Some(value) = lookup(SPECS_URL_VAR) {
            providers.specs_base_url = parse_base_url(SPECS_URL_VAR, &value)?;
        }
        if let Some(value) = lookup(IMAGES_URL_VAR) {
            providers.images_base_url = parse_base_url(IMAGES_URL_VAR, &value)?;
        }
        if let Some(value) = lookup(NEWS_URL_VAR) {
            providers.news_base_url = parse_base_url(NEWS_URL_VAR, &value)?;
        }
        if let Some(value) = lookup(TIMEOUT_VAR) {
            let secs: u64 = parse_positive(TIMEOUT_VAR, &value)?;
            providers.request_timeout = Duration::from_secs(secs);
        }
        if let Some(value) = lookup(IMAGE_PAGE_SIZE_VAR) {
            providers.image_page_size = parse_positive(IMAGE_PAGE_SIZE_VAR, &value)?;
        }
        if let Some(value) = lookup(NEWS_PAGE_SIZE_VAR) {
            providers.news_page_size = parse_positive(NEWS_PAGE_SIZE_VAR, &value)?;
        }
        if let Some(value) = lookup(NEWS_LANGUAGE_VAR) {
            let value = value.trim().to_lowercase();
            if !value.is_empty() {
                providers.news_language = value;
            }
        }

        let server = &mut config.server;
        if let Some(value) = lookup(HOST_VAR) {
            server.host = value.trim().to_string();
        }
        if let Some(value) = lookup(PORT_VAR) {
            server.port = parse_number(PORT_VAR, &value)?;
        }
        if let Some(value) = lookup(STATIC_DIR_VAR) {
            server.static_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup(TEMPLATES_DIR_VAR) {
            server.templates_dir = Some(PathBuf::from(value));
        }

        Ok(config)
    }
}

fn parse_number<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Like `parse_number`, but zero is rejected.
fn parse_positive<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
    T::Err: fmt::Display,
{
    let number: T = parse_number(key, value)?;
    if number < T::from(1) {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(number)
}

fn parse_base_url(key: &str, value: &str) -> Result<String> {
    let invalid = || ConfigError::InvalidUrl {
        key: key.to_string(),
        value: value.to_string(),
    };

    let parsed = url::Url::parse(value.trim()).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }

    Ok(value.trim().trim_end_matches('/').to_string())
}
