//! Home page - the search form

use crate::components::{layout, search_form};

/// Builds the body of the landing page.
pub fn home_content() -> String {
    let hints = r#"<ul class="hints muted">
            <li>Start with the make, optionally followed by the model: <em>Toyota Camry</em></li>
            <li>Common short names work too: <em>VW Golf</em>, <em>Chevy Malibu</em></li>
        </ul>"#;

    format!(
        r#"<section class="hero">
            {header}
            {form}
            {hints}
        </section>"#,
        header = layout::page_header(
            "Find a car",
            Some("Specifications, photos and recent news in one search"),
        ),
        form = search_form("e.g. Toyota Corolla"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_contains_form_and_hints() {
        let html = home_content();
        assert!(html.contains("<h1>Find a car</h1>"));
        assert!(html.contains(r#"action="/search""#));
        assert!(html.contains("VW Golf"));
    }
}
