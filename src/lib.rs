// Re-export modules
pub mod config;
pub mod extract;
pub mod records;
pub mod render;
pub mod report;
pub mod store;
pub mod walker;

// Re-export commonly used types for convenience
pub use records::{DetailRecord, DetailedResult, LinkEntry, PageLinksRecord, SeedRecord};

use config::ScrapeConfig;
use render::webdriver::WebDriverRenderer;
use report::{LogReporter, Reporter};
use std::error::Error;

/// Entry point for running scrape stages against a WebDriver-rendered browser
/// session.
///
/// One session is acquired per run, reused for every page visit, and closed
/// when the stage finishes. Per-page failures are absorbed by the walker; only
/// failing to reach a WebDriver server at all is an error here.
pub struct Harvester {
    config: ScrapeConfig,
    reporter: Box<dyn Reporter>,
}

impl Harvester {
    /// Create a new Harvester with default configuration
    pub fn new() -> Self {
        Self {
            config: ScrapeConfig::default(),
            reporter: Box::new(LogReporter),
        }
    }

    /// Set the configuration
    pub fn with_config(mut self, config: ScrapeConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn Error>> {
        let config = ScrapeConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Override the WebDriver URL
    pub fn with_webdriver_url(mut self, url: &str) -> Self {
        self.config.webdriver_url = url.to_string();
        self
    }

    /// Override the id of the container region holding child links
    pub fn with_container_id(mut self, id: &str) -> Self {
        self.config.container_id = id.to_string();
        self
    }

    /// Replace the diagnostics sink
    pub fn with_reporter(mut self, reporter: Box<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Stage one: harvest child links from every seed's listing page
    pub async fn collect_page_links(
        &self,
        seeds: &[SeedRecord],
    ) -> Result<Vec<PageLinksRecord>, Box<dyn Error>> {
        let mut renderer = self.connect().await?;
        let records = walker::run_stage_one(
            &mut renderer,
            seeds,
            &self.config.container_id,
            self.reporter.as_ref(),
        )
        .await;
        renderer.close().await;
        Ok(records)
    }

    /// Stage two: extract detail fields from every harvested link
    pub async fn collect_details(
        &self,
        records: &[PageLinksRecord],
    ) -> Result<Vec<DetailedResult>, Box<dyn Error>> {
        let mut renderer = self.connect().await?;
        let results =
            walker::run_stage_two(&mut renderer, records, self.reporter.as_ref()).await;
        renderer.close().await;
        Ok(results)
    }

    async fn connect(&self) -> Result<WebDriverRenderer, Box<dyn Error>> {
        // Override the WebDriver URL with an environment variable if provided
        let mut webdriver_url = self.config.webdriver_url.clone();
        if let Ok(env_url) = std::env::var("WEBDRIVER_URL") {
            if !env_url.is_empty() {
                webdriver_url = env_url;
            }
        }

        WebDriverRenderer::connect(&webdriver_url).await
    }
}

impl Default for Harvester {
    fn default() -> Self {
        Self::new()
    }
}
