//! HTTP request handlers organized by functionality

pub mod api;
pub mod pages;

// Re-export handler functions
pub use api::{SearchParams, api_search};
pub use pages::{SearchForm, index_page, search_submit};
