use crate::extract::{
    first_text, first_yield, following_element, labeled_cell, strip_noise, text_content,
};
use crate::records::{DetailRecord, NOT_AVAILABLE};
use crate::report::Reporter;
use log::Level;
use scraper::{Html, Selector};
use std::collections::BTreeMap;
use url::Url;

// Label strings as they appear in the source markup. Matching is exact
// substring, case-sensitive.
const POST_DATE_LABEL: &str = "Post Date / Update:";
const SHORT_INFO_LABEL: &str = "Short Information :";
const IMPORTANT_DATES_LABEL: &str = "Important Dates";
const APPLICATION_FEE_LABEL: &str = "Application Fee";
const USEFUL_LINKS_LABEL: &str = "Some Useful Important Links";

/// Extracts the structured fields of a detail page.
///
/// Total over any input: the returned record is always fully populated.
/// Missing structure resolves to the per-field defaults; empty list and
/// mapping fields are reported as warnings, scalar fields default silently.
/// The title keeps its empty-string default while the other scalars carry the
/// sentinel.
pub fn extract_fields(html: &str, url: &Url, reporter: &dyn Reporter) -> DetailRecord {
    let mut doc = Html::parse_document(html);
    strip_noise(&mut doc);

    let title = heading_text(&doc);
    let post_date = first_text(&[&|| adjacent_cell_text(&doc, POST_DATE_LABEL)])
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let short_info = first_text(&[&|| adjacent_cell_text(&doc, SHORT_INFO_LABEL)])
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let important_dates = section_entries(&doc, IMPORTANT_DATES_LABEL);
    let application_fees = section_entries(&doc, APPLICATION_FEE_LABEL);
    let links = useful_links(&doc, url);

    if important_dates.is_empty() {
        reporter.report(
            Level::Warn,
            &format!("No important dates found for URL: {}", url),
        );
    }
    if application_fees.is_empty() {
        reporter.report(
            Level::Warn,
            &format!("No application fees found for URL: {}", url),
        );
    }
    if links.is_empty() {
        reporter.report(
            Level::Warn,
            &format!("No useful links found for URL: {}", url),
        );
    }

    DetailRecord {
        title,
        post_date,
        short_info,
        important_dates,
        application_fees,
        links,
    }
}

/// Trimmed text of the first top-level heading; empty when absent
fn heading_text(doc: &Html) -> String {
    let headings = Selector::parse("h1").unwrap();
    doc.select(&headings)
        .next()
        .map(|el| text_content(&el))
        .unwrap_or_default()
}

/// Trimmed text of the cell following the one labeled `label`
fn adjacent_cell_text(doc: &Html, label: &str) -> Option<String> {
    let cell = labeled_cell(doc, label)?;
    let value = following_element(cell, "td")?;
    Some(text_content(&value))
}

/// Entries of the section cell following `label`: list items and paragraphs
/// together first, paragraphs alone as the fallback pass
fn section_entries(doc: &Html, label: &str) -> Vec<String> {
    first_yield(&[
        &|| section_texts(doc, label, "ul li, p"),
        &|| section_texts(doc, label, "p"),
    ])
}

fn section_texts(doc: &Html, label: &str, selector: &str) -> Vec<String> {
    let Some(cell) = labeled_cell(doc, label) else {
        return Vec::new();
    };
    let Some(section) = following_element(cell, "td") else {
        return Vec::new();
    };

    let entries = Selector::parse(selector).unwrap();
    section.select(&entries).map(|el| text_content(&el)).collect()
}

/// Anchor text to target mapping from the table following the useful-links
/// heading; duplicate link text keeps the later target
fn useful_links(doc: &Html, base: &Url) -> BTreeMap<String, Url> {
    let headings = Selector::parse("h2").unwrap();
    let anchors = Selector::parse("a").unwrap();

    let mut links = BTreeMap::new();

    let Some(heading) = doc
        .select(&headings)
        .find(|h| text_content(h).contains(USEFUL_LINKS_LABEL))
    else {
        return links;
    };
    let Some(table) = following_element(heading, "table") else {
        return links;
    };

    for anchor in table.select(&anchors) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if let Ok(target) = base.join(href) {
            links.insert(text_content(&anchor), target);
        }
    }

    links
}
