//! Reusable HTML components
//!
//! Components are server-rendered HTML fragments composed into full pages.
//! Every piece of text that did not originate in this crate goes through
//! `escape_html`, and every outbound link through `safe_url`.

pub mod layout;
pub mod vehicle;

// Re-export main component functions
pub use layout::{back_link, grid, notice, page_header, search_form};
pub use vehicle::{image_card, news_entry, spec_card};

/// Escapes text for use in HTML content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Returns the URL escaped for an attribute when it is absolute http(s).
///
/// Anything else (relative paths, `javascript:`, garbage) yields None so
/// the caller can drop the element.
pub fn safe_url(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(raw.trim()).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(escape_html(parsed.as_str())),
        _ => None,
    }
}

/// Capitalizes the first letter of every word, lowercasing the rest.
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }

    result
}
