//! Results page - specifications, photos and news for one query

use carfinder_search::{ResultBundle, SectionStatus};

use crate::components::{
    back_link, escape_html, grid, image_card, news_entry, notice, spec_card, title_case,
};

/// Builds the body of the results page for a bundle.
///
/// A section with renderable items gets a heading and its list; otherwise
/// a single notice is shown. Failed and empty sections read the same and
/// differ only in `data-status`.
pub fn results_content(bundle: &ResultBundle) -> String {
    let query = bundle.query.trim();

    let specs: Vec<String> = bundle.specs.items().iter().map(spec_card).collect();
    let images: Vec<String> = bundle
        .images
        .items()
        .iter()
        .filter_map(|image| image_card(image, query))
        .collect();
    let news: Vec<String> = bundle.news.items().iter().filter_map(news_entry).collect();

    [
        back_link(),
        format!(
            "<h2>Results for <strong>{}</strong></h2>",
            escape_html(&title_case(query))
        ),
        section(
            "specs",
            "Specifications",
            bundle.specs.status(),
            &specs,
            |items| grid(None, items),
            &format!("No specifications found for '{}'.", escape_html(query)),
        ),
        section(
            "images",
            "Images",
            bundle.images.status(),
            &images,
            |items| grid(Some("images"), items),
            "No images available.",
        ),
        section(
            "news",
            "Recent news",
            bundle.news.status(),
            &news,
            |items| format!(r#"<div class="news-list">{items}</div>"#),
            "No news found for this search.",
        ),
    ]
    .join("\n")
}

fn section(
    name: &str,
    heading: &str,
    status: SectionStatus,
    items: &[String],
    wrap: impl Fn(&str) -> String,
    empty_message: &str,
) -> String {
    if items.is_empty() {
        // Items may all have been dropped for unsafe links
        let status = match status {
            SectionStatus::Found => SectionStatus::Empty,
            other => other,
        };
        return notice(name, status.as_str(), empty_message);
    }

    format!(
        r#"<section data-section="{name}" data-status="{status}">
            <h3>{heading}</h3>
            {body}
        </section>"#,
        status = status.as_str(),
        body = wrap(&items.join("\n")),
    )
}

#[cfg(test)]
mod tests {
    use carfinder_search::{
        ImageResult, NewsItem, ProviderError, ProviderKind, SectionOutcome, VehicleSpec,
    };

    use super::*;

    fn bundle(query: &str) -> ResultBundle {
        ResultBundle {
            query: query.to_string(),
            lookup: carfinder_core::normalize(query),
            ..ResultBundle::default()
        }
    }

    #[test]
    fn test_empty_bundle_shows_three_placeholders() {
        let html = results_content(&ResultBundle::empty(""));
        assert!(html.contains("No specifications found"));
        assert!(html.contains("No images available."));
        assert!(html.contains("No news found for this search."));
        assert_eq!(html.matches(r#"data-status="empty""#).count(), 3);
    }

    #[test]
    fn test_heading_is_title_cased_and_escaped() {
        let html = results_content(&bundle("  toyota <camry> "));
        assert!(html.contains("Results for <strong>Toyota &lt;Camry&gt;</strong>"));
        assert!(!html.contains("<camry>"));
        assert!(html.contains(r#"href="/""#));
    }

    #[test]
    fn test_loaded_sections_render_items() {
        let mut b = bundle("tesla model 3");
        b.specs = SectionOutcome::loaded(vec![VehicleSpec {
            make: Some("tesla".to_string()),
            model: Some("model 3".to_string()),
            ..VehicleSpec::default()
        }]);
        b.images = SectionOutcome::loaded(vec![ImageResult {
            url: "https://img.example/1.jpg".to_string(),
            description: "white sedan".to_string(),
        }]);
        b.news = SectionOutcome::loaded(vec![NewsItem {
            title: "New battery".to_string(),
            url: "https://news.example/1".to_string(),
            source_name: "Wire".to_string(),
        }]);

        let html = results_content(&b);
        assert!(html.contains("Results for <strong>Tesla Model 3</strong>"));
        assert!(html.contains("<h3>Specifications</h3>"));
        assert!(html.contains(r#"<div class="grid images">"#));
        assert!(html.contains(r#"<div class="news-list">"#));
        assert!(html.contains("white sedan"));
        assert!(html.contains(r#"data-section="news" data-status="found""#));
        assert!(!html.contains("No news found"));
    }

    #[test]
    fn test_failed_section_reads_like_empty_but_is_tagged() {
        let mut b = bundle("toyota");
        b.news = SectionOutcome::Failed {
            reason: ProviderError::Timeout {
                provider: ProviderKind::News,
            }
            .to_string(),
        };

        let html = results_content(&b);
        assert!(html.contains(
            r#"<p class="card notice" data-section="news" data-status="unavailable">No news found for this search.</p>"#
        ));
        assert!(html.contains(r#"data-section="images" data-status="empty""#));
    }

    #[test]
    fn test_unsafe_links_are_dropped() {
        let mut b = bundle("toyota");
        b.images = SectionOutcome::loaded(vec![ImageResult {
            url: "javascript:alert(1)".to_string(),
            description: String::new(),
        }]);

        let html = results_content(&b);
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r#"data-section="images" data-status="empty">No images available."#));
    }
}
