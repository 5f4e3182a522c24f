//! Core types for vehicle lookups and aggregated results.

use std::fmt;

use carfinder_core::VehicleQuery;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The three external data sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Vehicle specification lookup
    Specs,
    /// Image search
    Images,
    /// News search
    News,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Specs => write!(f, "vehicle specifications"),
            ProviderKind::Images => write!(f, "image search"),
            ProviderKind::News => write!(f, "news search"),
        }
    }
}

/// One matching vehicle trim as reported by the specification provider.
///
/// Every attribute is optional. Values arrive as strings, numbers or
/// booleans depending on the field and subscription tier; they are kept as
/// display text exactly as sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSpec {
    /// Vehicle class, e.g. "midsize car"
    #[serde(default, deserialize_with = "lenient_text")]
    pub class: Option<String>,
    /// Transmission code, e.g. "a" or "m"
    #[serde(default, deserialize_with = "lenient_text")]
    pub transmission: Option<String>,
    /// Drive type, e.g. "fwd"
    #[serde(default, deserialize_with = "lenient_text")]
    pub drive: Option<String>,
    /// Fuel type, e.g. "gas"
    #[serde(default, deserialize_with = "lenient_text")]
    pub fuel_type: Option<String>,
    /// Cylinder count
    #[serde(default, deserialize_with = "lenient_text")]
    pub cylinders: Option<String>,
    /// Engine displacement in liters
    #[serde(default, deserialize_with = "lenient_text")]
    pub displacement: Option<String>,
    /// City fuel economy
    #[serde(default, deserialize_with = "lenient_text")]
    pub city_mpg: Option<String>,
    /// Highway fuel economy
    #[serde(default, deserialize_with = "lenient_text")]
    pub highway_mpg: Option<String>,
    /// Combined fuel economy
    #[serde(default, deserialize_with = "lenient_text")]
    pub combination_mpg: Option<String>,
    /// Manufacturer
    #[serde(default, deserialize_with = "lenient_text")]
    pub make: Option<String>,
    /// Model name
    #[serde(default, deserialize_with = "lenient_text")]
    pub model: Option<String>,
    /// Model year
    #[serde(default, deserialize_with = "lenient_text")]
    pub year: Option<String>,
}

/// Accepts any scalar JSON value as text; null and blank strings become None.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// A single image search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    /// Image URL, never empty
    pub url: String,
    /// Alt text, possibly empty
    pub description: String,
}

/// A single news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline
    pub title: String,
    /// Link to the article
    pub url: String,
    /// Publisher name
    pub source_name: String,
}

/// Result of one provider lookup.
///
/// Keeps "provider answered with nothing" apart from "provider failed",
/// while giving both the same empty item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionOutcome<T> {
    /// Provider answered; the list may be empty
    Loaded {
        /// Items in provider order
        items: Vec<T>,
    },
    /// Provider could not be reached or gave an unusable answer
    Failed {
        /// Human-readable failure reason for operators
        reason: String,
    },
}

/// Render-level status of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    /// At least one item
    Found,
    /// Provider answered with no items
    Empty,
    /// Provider failed
    Unavailable,
}

impl SectionStatus {
    /// Stable lowercase label, used in markup attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionStatus::Found => "found",
            SectionStatus::Empty => "empty",
            SectionStatus::Unavailable => "unavailable",
        }
    }
}

impl<T> SectionOutcome<T> {
    /// Successful outcome with the given items.
    pub fn loaded(items: Vec<T>) -> Self {
        Self::Loaded { items }
    }

    /// Successful outcome with no items.
    pub fn empty() -> Self {
        Self::Loaded { items: Vec::new() }
    }

    /// Items to render; empty when the provider failed.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Loaded { items } => items,
            Self::Failed { .. } => &[],
        }
    }

    /// Number of items to render.
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// True when there is nothing to render, for whatever reason.
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// True when the provider failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Classifies the outcome for rendering.
    pub fn status(&self) -> SectionStatus {
        match self {
            Self::Failed { .. } => SectionStatus::Unavailable,
            Self::Loaded { items } if items.is_empty() => SectionStatus::Empty,
            Self::Loaded { .. } => SectionStatus::Found,
        }
    }
}

impl<T> Default for SectionOutcome<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Everything gathered for one query, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultBundle {
    /// The query as typed, trimmed
    pub query: String,
    /// Make/model keys used for the specification lookup
    pub lookup: VehicleQuery,
    /// Matching vehicle trims
    pub specs: SectionOutcome<VehicleSpec>,
    /// Photos of the vehicle
    pub images: SectionOutcome<ImageResult>,
    /// Recent articles
    pub news: SectionOutcome<NewsItem>,
}

impl ResultBundle {
    /// Bundle with three empty sections, used when there is nothing to search.
    pub fn empty(query: &str) -> Self {
        Self {
            query: query.to_string(),
            ..Self::default()
        }
    }

    /// True when no section has anything to show.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty() && self.images.is_empty() && self.news.is_empty()
    }
}
