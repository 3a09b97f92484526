//! Surrogate field extraction.

use regex::Regex;
use std::sync::OnceLock;

// Matches element.surrogate.field_name and element.surrogate['field-name'].
// Bracket access is how templates reach fields with hyphens in their names.
fn surrogate_expr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"element\.surrogate(?:\.([A-Za-z0-9_]+)|\[['"]([^'"\]]+)['"]\])"#)
            .expect("surrogate field pattern is valid")
    })
}

/// Extract the surrogate field names referenced by a template fragment.
///
/// Inspects the fragment's metadata-access expressions without evaluating
/// the template. Names are returned in order of first appearance, without
/// duplicates, so repeated extraction is idempotent.
///
/// # Examples
///
/// ```
/// use raintale_template::surrogate_fields;
///
/// let fragment = "{{ element.surrogate.title }} \
///                 <img src=\"{{ element.surrogate['archive-favicon'] }}\">";
/// assert_eq!(surrogate_fields(fragment), vec!["title", "archive-favicon"]);
/// ```
pub fn surrogate_fields(fragment: &str) -> Vec<String> {
    let mut fields = Vec::new();

    for captures in surrogate_expr().captures_iter(fragment) {
        let name = captures
            .get(1)
            .or_else(|| captures.get(2))
            .map(|m| m.as_str().to_string());

        if let Some(name) = name
            && !fields.contains(&name)
        {
            fields.push(name);
        }
    }

    tracing::debug!(?fields, "extracted surrogate fields");
    fields
}
