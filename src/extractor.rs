use scraper::{Html, Selector};

/// One anchor element from a fetched results page, in document order.
/// Anchors are either site chrome (navigation, banners) or actual listings;
/// the boundary between the two is located by [`find_listing_boundary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub text: String,
    pub href: String,
}

/// Collects every `<a>` element of the page in document order. Text is
/// whitespace-trimmed; anchors without an href keep an empty one so the
/// sequence (and therefore the boundary index) matches the raw document.
pub fn parse_anchors(html: &str) -> Vec<Anchor> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a").unwrap();

    document
        .select(&selector)
        .map(|element| Anchor {
            text: element.text().collect::<String>().trim().to_string(),
            href: element.value().attr("href").unwrap_or("").trim().to_string(),
        })
        .collect()
}

/// Finds the index of the first real listing in the anchor sequence.
///
/// The site's markup exposes no usable listing container, so the boundary is
/// located by a textual landmark: the last chrome anchor reliably contains
/// the sentinel text ("Sign Up" in the current markup), and the very next
/// anchor is the first listing. Returns `None` when the sentinel never
/// appears, which callers must treat as a page-level failure rather than an
/// empty listing range.
///
/// This is the single most site-format-coupled function in the crate; if the
/// markup changes, this is the function to swap out.
pub fn find_listing_boundary(anchors: &[Anchor], sentinel: &str) -> Option<usize> {
    anchors
        .iter()
        .position(|anchor| anchor.text.contains(sentinel))
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
            <a href="/">Home</a>
            <a href="/signup">Sign Up</a>
            <a href="/v-bike/ottawa/mountain-bike/1001">Mountain Bike - $500</a>
            <a href="/v-bike/ottawa/road-bike/1002">Road Bike - $300</a>
        </body></html>
    "#;

    #[test]
    fn collects_anchors_in_document_order() {
        let anchors = parse_anchors(PAGE);
        assert_eq!(anchors.len(), 4);
        assert_eq!(anchors[0].text, "Home");
        assert_eq!(anchors[2].text, "Mountain Bike - $500");
        assert_eq!(anchors[2].href, "/v-bike/ottawa/mountain-bike/1001");
    }

    #[test]
    fn boundary_is_the_anchor_after_the_sentinel() {
        let anchors = parse_anchors(PAGE);
        let boundary = find_listing_boundary(&anchors, "Sign Up");
        assert_eq!(boundary, Some(2));
        assert_eq!(anchors[boundary.unwrap()].text, "Mountain Bike - $500");
    }

    #[test]
    fn missing_sentinel_yields_none() {
        let anchors = parse_anchors("<html><body><a href='/'>Home</a></body></html>");
        assert_eq!(find_listing_boundary(&anchors, "Sign Up"), None);
    }

    #[test]
    fn anchor_without_href_keeps_its_slot() {
        let anchors = parse_anchors("<html><body><a>Banner</a><a href='/x'>X</a></body></html>");
        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors[0].href, "");
    }
}
