use crate::listing_store::ListingStore;

/// Decides whether a candidate listing should trigger a notification:
/// at least one keyword must be a substring of the lowercased title, and the
/// exact title must not already be a store key.
///
/// Matching is substring containment, not tokenized — "scott" matches
/// "Scottsdale". That imprecision is inherited behavior and pinned by a test
/// below rather than fixed.
pub fn is_new_match(title: &str, keywords: &[String], store: &ListingStore) -> bool {
    let normalized = title.to_lowercase();
    keywords.iter().any(|keyword| normalized.contains(keyword.as_str()))
        && !store.contains(title)
}
