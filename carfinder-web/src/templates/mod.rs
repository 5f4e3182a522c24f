//! Page layout templates
//!
//! The base layout wraps every page. It ships embedded in the binary and can
//! be replaced at startup by a `base.html` from a configured directory.

pub mod engine;
pub mod rendering;

pub use engine::{BASE_TEMPLATE, TemplateEngine};
