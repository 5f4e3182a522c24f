//! Template rendering and interpolation logic

use serde_json::Value;

/// Interpolates `{{path}}` placeholders with context values.
///
/// The template is scanned once, so text inserted for one placeholder is
/// never itself treated as a placeholder. Unknown placeholders are kept as
/// written. Values are inserted as-is; callers escape untrusted text.
pub fn interpolate_template(template: &str, context: &Value) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(begin) = rest.find("{{") {
        let Some(len) = rest[begin..].find("}}") else {
            break;
        };
        let end = begin + len + 2;
        let property_path = rest[begin + 2..end - 2].trim();

        result.push_str(&rest[..begin]);
        match get_nested_value(context, property_path) {
            Some(value) => result.push_str(&value_text(value)),
            None => result.push_str(&rest[begin..end]),
        }
        rest = &rest[end..];
    }

    result.push_str(rest);
    result
}

/// Wraps page content in the base layout.
///
/// The title is HTML-escaped; content is inserted unchanged.
pub fn wrap_in_base(base_template: &str, title: &str, content: &str) -> String {
    let context = serde_json::json!({
        "title": crate::components::escape_html(title),
        "content": content,
    });
    interpolate_template(base_template, &context)
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
        Value::Null => String::new(),
    }
}

/// Get nested value from JSON using dot notation (e.g., "page.title").
fn get_nested_value<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;

    for part in path.split('.') {
        current = current.get(part)?;
    }

    Some(current)
}
