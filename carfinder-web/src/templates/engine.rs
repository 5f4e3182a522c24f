//! Template engine holding the page layout.

use std::fs;
use std::path::Path;

use carfinder_core::ServerConfig;
use tracing::info;

use super::rendering::wrap_in_base;
use crate::{HtmlResponse, WebError};

/// Layout compiled into the binary.
pub const BASE_TEMPLATE: &str = include_str!("../../templates/base.html");

const CONTENT_PLACEHOLDER: &str = "{{content}}";

/// Template rendering engine for server-side rendering.
///
/// Loaded once at startup; rendering afterwards cannot fail.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    base_template: String,
}

impl TemplateEngine {
    /// Creates an engine using the embedded layout.
    pub fn embedded() -> Self {
        Self {
            base_template: BASE_TEMPLATE.to_string(),
        }
    }

    /// Creates an engine from `base.html` in the given directory.
    ///
    /// # Errors
    /// - `WebError::TemplateError` - File unreadable or missing the `{{content}}` placeholder
    pub fn from_directory<P: AsRef<Path>>(template_dir: P) -> Result<Self, WebError> {
        let path = template_dir.as_ref().join("base.html");
        let base_template = fs::read_to_string(&path).map_err(|e| WebError::TemplateError {
            reason: format!("Failed to load base template {}: {e}", path.display()),
        })?;

        Self::from_string(base_template)
    }

    /// Creates an engine from layout text.
    ///
    /// # Errors
    /// - `WebError::TemplateError` - Layout lacks the `{{content}}` placeholder
    pub fn from_string(base_template: String) -> Result<Self, WebError> {
        if !base_template.contains(CONTENT_PLACEHOLDER) {
            return Err(WebError::TemplateError {
                reason: format!("Base template has no {CONTENT_PLACEHOLDER} placeholder"),
            });
        }

        Ok(Self { base_template })
    }

    /// Picks the layout named by server configuration.
    ///
    /// # Errors
    /// - `WebError::TemplateError` - Configured layout could not be loaded
    pub fn from_config(config: &ServerConfig) -> Result<Self, WebError> {
        match &config.templates_dir {
            Some(dir) => {
                info!("Loading page template from {}", dir.display());
                Self::from_directory(dir)
            }
            None => Ok(Self::embedded()),
        }
    }

    /// Wraps page content in the layout.
    pub fn render(&self, title: &str, content: &str) -> HtmlResponse {
        axum::response::Html(wrap_in_base(&self.base_template, title, content))
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_embedded_layout_renders_title_and_content() {
        let engine = TemplateEngine::embedded();
        let html = engine.render("Search", "<p>hello</p>").0;

        assert!(html.contains("<title>Search - Carfinder</title>"));
        assert!(html.contains("<p>hello</p>"));
        assert!(html.contains("/static/css/main.css"));
    }

    #[test]
    fn test_from_directory_loads_custom_layout() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("base.html"),
            "<main data-title=\"{{title}}\">{{content}}</main>",
        )
        .unwrap();

        let engine = TemplateEngine::from_directory(dir.path()).unwrap();
        let html = engine.render("Home", "x").0;
        assert_eq!(html, "<main data-title=\"Home\">x</main>");
    }

    #[test]
    fn test_missing_layout_is_startup_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TemplateEngine::from_directory(dir.path()).unwrap_err();
        assert!(matches!(err, WebError::TemplateError { .. }));
    }

    #[test]
    fn test_layout_without_content_placeholder_rejected() {
        let err = TemplateEngine::from_string("<html>{{title}}</html>".to_string()).unwrap_err();
        assert!(matches!(err, WebError::TemplateError { .. }));
    }

    #[test]
    fn test_from_config_defaults_to_embedded() {
        let config = ServerConfig::default();
        assert!(TemplateEngine::from_config(&config).is_ok());

        let config = ServerConfig {
            templates_dir: Some(PathBuf::from("/definitely/not/here")),
            ..ServerConfig::default()
        };
        assert!(TemplateEngine::from_config(&config).is_err());
    }
}
