pub mod detail;
pub mod links;

#[cfg(test)]
mod tests;

use scraper::{ElementRef, Html, Selector};

/// Concatenated, trimmed text of an element and its descendants
pub(crate) fn text_content(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// The element sibling immediately following `element`, if its tag is `name`
pub(crate) fn following_element<'a>(
    element: ElementRef<'a>,
    name: &str,
) -> Option<ElementRef<'a>> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .next()
        .filter(|el| el.value().name() == name)
}

/// First table cell in document order whose text contains `label` and that is
/// immediately followed by another cell
pub(crate) fn labeled_cell<'a>(doc: &'a Html, label: &str) -> Option<ElementRef<'a>> {
    let cells = Selector::parse("td").unwrap();
    doc.select(&cells)
        .find(|cell| text_content(cell).contains(label) && following_element(*cell, "td").is_some())
}

/// Detaches inline script and ad-container elements so their text cannot leak
/// into extracted fields
pub(crate) fn strip_noise(doc: &mut Html) {
    let noise = Selector::parse("script, ins").unwrap();
    let ids: Vec<_> = doc.select(&noise).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Runs fallback strategies in order and returns the first non-empty batch.
///
/// Adding a fallback for a field means appending a strategy here, not nesting
/// another conditional at the call site.
pub(crate) fn first_yield<T>(strategies: &[&dyn Fn() -> Vec<T>]) -> Vec<T> {
    for strategy in strategies {
        let found = strategy();
        if !found.is_empty() {
            return found;
        }
    }
    Vec::new()
}

/// Runs fallback strategies in order and returns the first non-empty text
pub(crate) fn first_text(strategies: &[&dyn Fn() -> Option<String>]) -> Option<String> {
    strategies
        .iter()
        .find_map(|strategy| strategy().filter(|text| !text.is_empty()))
}
