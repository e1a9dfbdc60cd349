use crate::extract::text_content;
use crate::records::LinkEntry;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Harvests `{name, link}` pairs from the id-addressed container region of a
/// listing page.
///
/// Walks every `ul` inside the container in document order and, for each
/// direct `li` child, takes the first anchor's trimmed text and href, resolved
/// against the page URL. Items missing a name or a resolvable href are skipped
/// silently. No dedup, no sorting.
///
/// An absent container region yields an empty result, not an error.
pub fn harvest_links(html: &str, container_id: &str, base: &Url) -> Vec<LinkEntry> {
    let doc = Html::parse_document(html);

    let lists = match Selector::parse(&format!("#{} ul", container_id)) {
        Ok(selector) => selector,
        Err(e) => {
            ::log::warn!("Invalid container id {:?}: {}", container_id, e);
            return Vec::new();
        }
    };
    let anchors = Selector::parse("a").unwrap();

    let mut entries = Vec::new();
    for list in doc.select(&lists) {
        for item in list.children().filter_map(ElementRef::wrap) {
            if item.value().name() != "li" {
                continue;
            }

            let Some(anchor) = item.select(&anchors).next() else {
                continue;
            };

            let name = text_content(&anchor);
            let href = anchor.value().attr("href").unwrap_or_default();
            if name.is_empty() || href.is_empty() {
                continue;
            }

            if let Ok(link) = base.join(href) {
                entries.push(LinkEntry { name, link });
            }
        }
    }

    ::log::debug!("Harvested {} links from #{}", entries.len(), container_id);
    entries
}
