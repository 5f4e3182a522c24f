//! Carfinder Web - Server-rendered vehicle search UI

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Serves a search form, renders aggregated specification, image and news
//! results as HTML, and exposes the same results as JSON for other clients.

pub mod components;
pub mod handlers;
pub mod pages;
pub mod server;
pub mod templates;

use thiserror::Error;

// Re-export main types
pub use server::{AppState, build_router, run_server};
pub use templates::TemplateEngine;

/// HTML response type produced by page handlers.
pub type HtmlResponse = axum::response::Html<String>;

/// Errors raised while setting up or running the web server.
#[derive(Debug, Error)]
pub enum WebError {
    /// Page template could not be loaded or is unusable.
    #[error("Template error: {reason}")]
    TemplateError {
        /// The reason the template was rejected
        reason: String,
    },

    /// Socket bind or serve failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
