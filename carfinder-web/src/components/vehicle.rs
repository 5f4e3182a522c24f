//! Vehicle result components - specification cards, photos, articles

use carfinder_search::{ImageResult, NewsItem, VehicleSpec};

use super::{escape_html, safe_url};

/// Shown in place of any attribute the provider left out.
pub const PLACEHOLDER: &str = "-";

fn field(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(escape_html)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Renders one vehicle trim as a card of labeled attributes.
pub fn spec_card(spec: &VehicleSpec) -> String {
    let make = spec.make.as_deref().map(escape_html).unwrap_or_default();
    let model = spec.model.as_deref().map(escape_html).unwrap_or_default();
    let heading = format!("{make} {model}");

    let rows = [
        ("Class", &spec.class),
        ("Transmission", &spec.transmission),
        ("Drive", &spec.drive),
        ("Fuel", &spec.fuel_type),
        ("Cylinders", &spec.cylinders),
        ("Displacement", &spec.displacement),
        ("City MPG", &spec.city_mpg),
        ("Highway MPG", &spec.highway_mpg),
        ("Combined MPG", &spec.combination_mpg),
    ]
    .into_iter()
    .map(|(label, value)| format!("<li><strong>{label}:</strong> {}</li>", field(value)))
    .collect::<Vec<_>>()
    .join("\n");

    format!(
        r#"<article class="card spec">
            <h3>{heading} <span class="muted">({year})</span></h3>
            <ul class="specs">
{rows}
            </ul>
        </article>"#,
        heading = heading.trim(),
        year = field(&spec.year),
    )
}

/// Renders one photo, or None when its URL is not safe to embed.
///
/// `alt` is the user's query and describes what the photo was searched for.
pub fn image_card(image: &ImageResult, alt: &str) -> Option<String> {
    let src = safe_url(&image.url)?;
    Some(format!(
        r#"<div class="card">
            <img src="{src}" alt="{alt}" loading="lazy" />
            <p class="caption">{caption}</p>
        </div>"#,
        alt = escape_html(alt),
        caption = escape_html(&image.description),
    ))
}

/// Renders one article link, or None when its URL is not safe to link.
pub fn news_entry(item: &NewsItem) -> Option<String> {
    let href = safe_url(&item.url)?;
    Some(format!(
        r#"<div class="card news-item">
            <a href="{href}" target="_blank" rel="noopener noreferrer">{title}</a>
            <p class="muted">{source}</p>
        </div>"#,
        title = escape_html(&item.title),
        source = escape_html(&item.source_name),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_card_uses_placeholder_for_missing_fields() {
        let spec = VehicleSpec {
            make: Some("toyota".to_string()),
            model: Some("camry".to_string()),
            year: Some("2020".to_string()),
            cylinders: Some("4".to_string()),
            ..VehicleSpec::default()
        };

        let html = spec_card(&spec);
        assert!(html.contains("toyota camry"));
        assert!(html.contains("(2020)"));
        assert!(html.contains("<li><strong>Cylinders:</strong> 4</li>"));
        assert!(html.contains("<li><strong>Class:</strong> -</li>"));
        assert!(html.contains("<li><strong>Combined MPG:</strong> -</li>"));
    }

    #[test]
    fn test_spec_card_all_fields_missing() {
        let html = spec_card(&VehicleSpec::default());
        assert!(html.contains("(-)"));
        assert_eq!(html.matches("</strong> -</li>").count(), 9);
    }

    #[test]
    fn test_spec_card_escapes_provider_text() {
        let spec = VehicleSpec {
            class: Some("<b>suv</b>".to_string()),
            ..VehicleSpec::default()
        };
        let html = spec_card(&spec);
        assert!(html.contains("&lt;b&gt;suv&lt;/b&gt;"));
        assert!(!html.contains("<b>suv</b>"));
    }

    #[test]
    fn test_image_card_escapes_and_rejects_unsafe_urls() {
        let image = ImageResult {
            url: "https://img.example/car.jpg".to_string(),
            description: "a \"red\" car".to_string(),
        };
        let html = image_card(&image, "Toyota <Camry>").unwrap();
        assert!(html.contains(r#"src="https://img.example/car.jpg""#));
        assert!(html.contains(r#"alt="Toyota &lt;Camry&gt;""#));
        assert!(html.contains("a &quot;red&quot; car"));

        let unsafe_image = ImageResult {
            url: "javascript:alert(1)".to_string(),
            description: String::new(),
        };
        assert!(image_card(&unsafe_image, "x").is_none());
    }

    #[test]
    fn test_news_entry_links_out() {
        let item = NewsItem {
            title: "Camry & Corolla recall".to_string(),
            url: "https://news.example/recall".to_string(),
            source_name: "Motor".to_string(),
        };
        let html = news_entry(&item).unwrap();
        assert!(html.contains(r#"href="https://news.example/recall""#));
        assert!(html.contains("Camry &amp; Corolla recall"));
        assert!(html.contains(r#"target="_blank""#));
    }
}
