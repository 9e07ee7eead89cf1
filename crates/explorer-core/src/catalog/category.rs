//! Category tag helpers.

/// Keep only non-empty string entries from a raw category listing.
///
/// The categories endpoint is expected to return a JSON array of strings.
/// Anything else (objects, numbers, nulls, empty strings) is dropped.
pub fn sanitize_categories(raw: Vec<serde_json::Value>) -> Vec<String> {
    raw.into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
        .collect()
}

/// Human label for a category slug.
///
/// Upper-cases the first character and replaces the first `-` with a space,
/// e.g. `"home-decoration"` becomes `"Home decoration"`.
pub fn category_label(slug: &str) -> String {
    let mut chars = slug.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str().replacen('-', " ", 1);
    first.to_uppercase().chain(rest.chars()).collect()
}
