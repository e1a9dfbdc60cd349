use crate::extract::detail::extract_fields;
use crate::extract::links::harvest_links;
use crate::records::{DetailRecord, DetailedResult, PageLinksRecord, SeedRecord};
use crate::render::Renderer;
use crate::report::Reporter;
use log::Level;

/// Stage one: visit every seed's listing page and harvest its child links.
///
/// Strictly sequential, in input order. A seed whose page cannot be rendered
/// still yields a record, with an empty link sequence, so one bad URL never
/// aborts the batch.
pub async fn run_stage_one<R: Renderer>(
    renderer: &mut R,
    seeds: &[SeedRecord],
    container_id: &str,
    reporter: &dyn Reporter,
) -> Vec<PageLinksRecord> {
    let mut records = Vec::with_capacity(seeds.len());

    for seed in seeds {
        reporter.report(Level::Info, &format!("Scraping links from: {}", seed.link));

        let page_links = match renderer.render(&seed.link).await {
            Ok(html) => harvest_links(&html, container_id, &seed.link),
            Err(e) => {
                reporter.report(
                    Level::Error,
                    &format!("Error scraping links from {}: {}", seed.link, e),
                );
                Vec::new()
            }
        };

        records.push(PageLinksRecord {
            heading: seed.title.clone(),
            link: seed.link.clone(),
            page_links,
        });
    }

    records
}

/// Stage two: visit every harvested link and extract its detail fields.
///
/// Output order equals input traversal order, outer-major, inner-minor. A
/// link whose page cannot be rendered yields the all-default record and the
/// walk continues.
pub async fn run_stage_two<R: Renderer>(
    renderer: &mut R,
    records: &[PageLinksRecord],
    reporter: &dyn Reporter,
) -> Vec<DetailedResult> {
    let mut results = Vec::new();

    for record in records {
        reporter.report(
            Level::Info,
            &format!("Scraping details for heading: {}", record.heading),
        );

        for entry in &record.page_links {
            reporter.report(Level::Info, &format!("Scraping details from: {}", entry.link));

            let details = match renderer.render(&entry.link).await {
                Ok(html) => extract_fields(&html, &entry.link, reporter),
                Err(e) => {
                    reporter.report(
                        Level::Error,
                        &format!("Error scraping details from {}: {}", entry.link, e),
                    );
                    DetailRecord::unavailable()
                }
            };

            results.push(DetailedResult {
                heading: record.heading.clone(),
                page_name: entry.name.clone(),
                link: entry.link.clone(),
                details,
            });
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::NOT_AVAILABLE;
    use crate::render::RenderError;
    use crate::report::MemoryReporter;
    use std::collections::HashMap;
    use url::Url;

    /// Renderer serving canned pages from memory
    struct MockRenderer {
        pages: HashMap<String, String>,
    }

    impl MockRenderer {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(url, html)| (url.to_string(), html.to_string()))
                    .collect(),
            }
        }
    }

    impl Renderer for MockRenderer {
        async fn render(&mut self, url: &Url) -> Result<String, RenderError> {
            self.pages
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| format!("no page for {}", url).into())
        }
    }

    fn seed(title: &str, link: &str) -> SeedRecord {
        SeedRecord {
            title: title.to_string(),
            link: Url::parse(link).unwrap(),
        }
    }

    fn page_links_record(heading: &str, link: &str, entries: &[(&str, &str)]) -> PageLinksRecord {
        PageLinksRecord {
            heading: heading.to_string(),
            link: Url::parse(link).unwrap(),
            page_links: entries
                .iter()
                .map(|(name, link)| crate::records::LinkEntry {
                    name: name.to_string(),
                    link: Url::parse(link).unwrap(),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_stage_one_collects_page_links() {
        let listing = r#"<html><body>
            <div id="post"><ul><li><a href="http://x/item1">Item1</a></li></ul></div>
        </body></html>"#;
        let mut renderer = MockRenderer::new(&[("http://x/1", listing)]);
        let reporter = MemoryReporter::new();

        let records =
            run_stage_one(&mut renderer, &[seed("Cat1", "http://x/1")], "post", &reporter).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].heading, "Cat1");
        assert_eq!(records[0].link.as_str(), "http://x/1");
        assert_eq!(records[0].page_links.len(), 1);
        assert_eq!(records[0].page_links[0].name, "Item1");
        assert_eq!(records[0].page_links[0].link.as_str(), "http://x/item1");

        let entries = reporter.entries();
        assert!(
            entries
                .iter()
                .any(|(_, m)| m == "Scraping links from: http://x/1")
        );
    }

    #[tokio::test]
    async fn test_stage_one_tolerates_failed_seed() {
        let listing = r#"<html><body>
            <div id="post"><ul><li><a href="http://x/item2">Item2</a></li></ul></div>
        </body></html>"#;
        // First seed has no page; the walk must still reach the second.
        let mut renderer = MockRenderer::new(&[("http://x/2", listing)]);
        let reporter = MemoryReporter::new();

        let records = run_stage_one(
            &mut renderer,
            &[seed("Cat1", "http://x/1"), seed("Cat2", "http://x/2")],
            "post",
            &reporter,
        )
        .await;

        assert_eq!(records.len(), 2);
        assert!(records[0].page_links.is_empty());
        assert_eq!(records[1].page_links.len(), 1);

        let errors: Vec<_> = reporter
            .entries()
            .into_iter()
            .filter(|(level, _)| *level == Level::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].1.starts_with("Error scraping links from http://x/1"));
    }

    #[tokio::test]
    async fn test_stage_two_preserves_batch_order() {
        let mut renderer = MockRenderer::new(&[
            ("http://x/a1", "<html><body><h1>A1</h1></body></html>"),
            ("http://x/a2", "<html><body><h1>A2</h1></body></html>"),
            ("http://x/b1", "<html><body><h1>B1</h1></body></html>"),
            ("http://x/b2", "<html><body><h1>B2</h1></body></html>"),
        ]);
        let reporter = MemoryReporter::new();

        let records = [
            page_links_record(
                "A",
                "http://x/a",
                &[("A link 1", "http://x/a1"), ("A link 2", "http://x/a2")],
            ),
            page_links_record(
                "B",
                "http://x/b",
                &[("B link 1", "http://x/b1"), ("B link 2", "http://x/b2")],
            ),
        ];

        let results = run_stage_two(&mut renderer, &records, &reporter).await;

        let visited: Vec<_> = results.iter().map(|r| r.link.as_str()).collect();
        assert_eq!(
            visited,
            vec!["http://x/a1", "http://x/a2", "http://x/b1", "http://x/b2"]
        );
        assert_eq!(results[0].heading, "A");
        assert_eq!(results[0].page_name, "A link 1");
        assert_eq!(results[0].details.title, "A1");
        assert_eq!(results[3].heading, "B");
        assert_eq!(results[3].details.title, "B2");
    }

    #[tokio::test]
    async fn test_stage_two_substitutes_unavailable_record_on_failure() {
        let mut renderer =
            MockRenderer::new(&[("http://x/ok", "<html><body><h1>Ok</h1></body></html>")]);
        let reporter = MemoryReporter::new();

        let records = [page_links_record(
            "Cat1",
            "http://x/1",
            &[("Broken", "http://x/broken"), ("Ok", "http://x/ok")],
        )];

        let results = run_stage_two(&mut renderer, &records, &reporter).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].details, DetailRecord::unavailable());
        assert_eq!(results[0].details.title, NOT_AVAILABLE);
        assert_eq!(results[1].details.title, "Ok");

        assert!(
            reporter
                .entries()
                .iter()
                .any(|(level, m)| *level == Level::Error
                    && m.starts_with("Error scraping details from http://x/broken"))
        );
    }
}
