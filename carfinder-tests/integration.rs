//! Integration tests for Carfinder
//!
//! These tests run the real providers against mock HTTP servers and drive
//! the web router end to end, checking the contracts between configuration,
//! search orchestration and page rendering.

mod support;

#[path = "style.rs"]
mod style;

#[path = "integration/search_flow.rs"]
mod search_flow;

#[path = "integration/web_flow.rs"]
mod web_flow;
