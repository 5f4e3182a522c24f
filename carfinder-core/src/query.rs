//! Query normalization.
//!
//! Turns free text typed by a user ("Toyota Camry", "vw", "  Tesla Model 3")
//! into the make/model keys the specification provider is queried with.

use serde::Serialize;

/// Common shorthand makes mapped to the name the specification provider knows.
pub const MAKE_ALIASES: &[(&str, &str)] = &[
    ("mercedes", "mercedes-benz"),
    ("vw", "volkswagen"),
    ("chevy", "chevrolet"),
];

/// Normalized make/model lookup keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VehicleQuery {
    /// Lowercased make with aliases resolved
    pub make: String,
    /// Lowercased model, empty when only a make was given
    pub model: String,
}

impl VehicleQuery {
    /// True when there is nothing to look up.
    pub fn is_empty(&self) -> bool {
        self.make.is_empty()
    }
}

/// Normalizes raw user input into make/model keys.
///
/// Trims and lowercases the input, then splits on the first whitespace.
/// The whitespace run separating make from model is dropped; whitespace
/// inside the model is kept as typed. Aliases apply to the make only.
pub fn normalize(raw: &str) -> VehicleQuery {
    let cleaned = raw.trim().to_lowercase();

    let (make, model) = match cleaned.split_once(char::is_whitespace) {
        Some((make, rest)) => (make, rest.trim_start()),
        None => (cleaned.as_str(), ""),
    };

    VehicleQuery {
        make: resolve_make_alias(make).to_string(),
        model: model.to_string(),
    }
}

/// Maps a known shorthand to its canonical make by exact match.
pub fn resolve_make_alias(make: &str) -> &str {
    MAKE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == make)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(make)
}
