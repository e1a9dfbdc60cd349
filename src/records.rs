use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// Placeholder for a scalar field that could not be located on a page.
pub const NOT_AVAILABLE: &str = "Not available";

/// A top-level category driving stage-one crawling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRecord {
    /// Category heading
    pub title: String,

    /// URL of the category's listing page
    pub link: Url,
}

/// A child link discovered inside a listing page's container region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Trimmed text of the link's anchor
    pub name: String,

    /// Link target, resolved against the listing page URL
    pub link: Url,
}

/// Stage-one output: a category together with the links harvested from its page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLinksRecord {
    /// Category heading carried over from the seed
    pub heading: String,

    /// URL of the listing page the links came from
    pub link: Url,

    /// Harvested links in document order (duplicates preserved)
    pub page_links: Vec<LinkEntry>,
}

/// The structured fields extracted from a single detail page.
///
/// Always fully populated: missing scalars carry [`NOT_AVAILABLE`], missing
/// lists and mappings are empty. Downstream consumers need no null-checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    /// Text of the page's first top-level heading; empty when absent
    pub title: String,

    /// Value of the "Post Date / Update:" cell
    pub post_date: String,

    /// Value of the "Short Information :" cell
    pub short_info: String,

    /// Entries from the "Important Dates" section, in document order
    pub important_dates: Vec<String>,

    /// Entries from the "Application Fee" section, in document order
    pub application_fees: Vec<String>,

    /// Link text to target from the useful links table (last write wins)
    pub links: BTreeMap<String, Url>,
}

impl DetailRecord {
    /// The all-default record substituted when an entire page fails.
    pub fn unavailable() -> Self {
        Self {
            title: NOT_AVAILABLE.to_string(),
            post_date: NOT_AVAILABLE.to_string(),
            short_info: NOT_AVAILABLE.to_string(),
            important_dates: Vec::new(),
            application_fees: Vec::new(),
            links: BTreeMap::new(),
        }
    }
}

/// Final persisted unit: one per link entry processed in stage two
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedResult {
    /// Category heading the link was found under
    pub heading: String,

    /// Name of the link entry the details came from
    pub page_name: String,

    /// URL of the detail page
    pub link: Url,

    /// Extracted fields
    pub details: DetailRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_record_is_fully_populated() {
        let record = DetailRecord::unavailable();
        assert_eq!(record.title, NOT_AVAILABLE);
        assert_eq!(record.post_date, NOT_AVAILABLE);
        assert_eq!(record.short_info, NOT_AVAILABLE);
        assert!(record.important_dates.is_empty());
        assert!(record.application_fees.is_empty());
        assert!(record.links.is_empty());
    }

    #[test]
    fn test_detailed_result_serializes_camel_case() {
        let result = DetailedResult {
            heading: "Cat1".to_string(),
            page_name: "Item1".to_string(),
            link: Url::parse("http://x/item1").unwrap(),
            details: DetailRecord::unavailable(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("pageName").is_some());
        assert!(json["details"].get("postDate").is_some());
        assert!(json["details"].get("shortInfo").is_some());
        assert!(json["details"].get("importantDates").is_some());
        assert!(json["details"].get("applicationFees").is_some());
    }

    #[test]
    fn test_page_links_record_round_trip() {
        let json = r#"{
            "heading": "Cat1",
            "link": "http://x/1",
            "pageLinks": [{ "name": "Item1", "link": "http://x/item1" }]
        }"#;

        let record: PageLinksRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.heading, "Cat1");
        assert_eq!(record.page_links.len(), 1);
        assert_eq!(record.page_links[0].name, "Item1");

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("pageLinks").is_some());
    }
}
