//! Layout components - headers, cards, grids, the search form

/// Renders a page header with title and optional subtitle.
///
/// Both arguments are trusted markup.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="lead">{s}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="page-header">
            <h1>{title}</h1>
            {subtitle_html}
        </div>"#
    )
}

/// Renders a grid container. `extra_class` is appended to `grid`.
pub fn grid(extra_class: Option<&str>, content: &str) -> String {
    let class = match extra_class {
        Some(extra) => format!("grid {extra}"),
        None => "grid".to_string(),
    };
    format!(r#"<div class="{class}">{content}</div>"#)
}

/// Renders a placeholder card for a section with nothing to show.
///
/// `status` lands in `data-status` so an empty answer and a failed
/// provider can be told apart without changing what the user reads.
pub fn notice(section: &str, status: &str, message: &str) -> String {
    format!(
        r#"<p class="card notice" data-section="{section}" data-status="{status}">{message}</p>"#
    )
}

/// Renders the link back to the search form.
pub fn back_link() -> String {
    r#"<a class="back" href="/">&larr; Back</a>"#.to_string()
}

/// Renders the query form that posts to `/search`.
pub fn search_form(placeholder: &str) -> String {
    format!(
        r#"<form action="/search" method="post" class="search-form">
            <input name="query" type="text" placeholder="{placeholder}" required />
            <button type="submit">Search</button>
        </form>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_class() {
        assert_eq!(grid(None, "x"), r#"<div class="grid">x</div>"#);
        assert_eq!(grid(Some("images"), "x"), r#"<div class="grid images">x</div>"#);
    }

    #[test]
    fn test_notice_carries_status() {
        let html = notice("news", "unavailable", "No news found.");
        assert!(html.contains(r#"data-section="news""#));
        assert!(html.contains(r#"data-status="unavailable""#));
        assert!(html.contains("No news found."));
    }

    #[test]
    fn test_search_form_posts_query_field() {
        let html = search_form("e.g. Toyota");
        assert!(html.contains(r#"action="/search""#));
        assert!(html.contains(r#"method="post""#));
        assert!(html.contains(r#"name="query""#));
        assert!(html.contains("required"));
    }
}
