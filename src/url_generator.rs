use url::Url;

use crate::error::ScanError;

/// Path-segment position where the `page-{n}` marker goes, counted from the
/// first segment after the host. For a Kijiji search URL
/// `/b-bikes/ottawa/bike/k0c644...` that places it just before the
/// search-key segment.
const PAGE_SEGMENT_INDEX: usize = 3;

/// Expands the base (page 1) search URL into the per-cycle page list: the
/// base URL first, then pages 2..=max_pages in ascending order, query string
/// intact. The base URL must carry at least `PAGE_SEGMENT_INDEX` path
/// segments; anything shorter is a configuration error caught at startup.
pub fn generate_page_urls(base_url: &str, max_pages: u32) -> Result<Vec<String>, ScanError> {
    let parsed = Url::parse(base_url).map_err(|e| ScanError::BadBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    let segments: Vec<String> = parsed
        .path_segments()
        .map(|s| s.map(str::to_string).collect())
        .unwrap_or_default();

    if segments.len() < PAGE_SEGMENT_INDEX {
        return Err(ScanError::BadBaseUrl {
            url: base_url.to_string(),
            reason: format!(
                "expected at least {} path segments, found {}",
                PAGE_SEGMENT_INDEX,
                segments.len()
            ),
        });
    }

    let mut urls = vec![base_url.to_string()];
    for page in 2..=max_pages {
        let mut paged = segments.clone();
        paged.insert(PAGE_SEGMENT_INDEX, format!("page-{}", page));

        let mut url = parsed.clone();
        url.set_path(&paged.join("/"));
        urls.push(url.to_string());
    }

    Ok(urls)
}
