//! Slug derivation and tag text normalization.

use crate::errors::ServiceError;

/// Derive the URL-safe slug for a blog title.
///
/// Fails with a validation error when nothing usable is left, e.g. a title
/// made only of punctuation.
pub fn slug_for_title(title: &str) -> Result<String, ServiceError> {
    let slug = ::slug::slugify(title);
    if slug.is_empty() {
        return Err(ServiceError::Validation(format!("title '{title}' does not produce a usable slug")));
    }
    Ok(slug)
}

/// Trim tag texts, drop blank ones and collapse repeats, keeping first-seen order.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for t in tags {
        let t = t.trim();
        if t.is_empty() || out.iter().any(|seen| seen == t) {
            continue;
        }
        out.push(t.to_string());
    }
    out
}
