//! Carfinder Search - Vehicle data lookup and aggregation

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Queries a vehicle specification provider, an image search provider and
//! a news search provider for one user query, and merges whatever each of
//! them returns into a single render-ready bundle.

pub mod errors;
pub mod providers;
pub mod service;
pub mod types;

// Re-export main types
pub use errors::ProviderError;
pub use providers::{ImageProvider, NewsProvider, SpecProvider};
pub use service::VehicleSearchService;
pub use types::{
    ImageResult, NewsItem, ProviderKind, ResultBundle, SectionOutcome, SectionStatus, VehicleSpec,
};

/// Convenience type alias for Results with ProviderError.
pub type Result<T> = std::result::Result<T, ProviderError>;
