//! Page bodies composed from components
//!
//! Pages are pure functions from data to markup. Handlers wrap the result
//! in the base layout, so everything here is testable without HTTP.

pub mod home;
pub mod results;

// Re-export page builders
pub use home::home_content;
pub use results::results_content;
