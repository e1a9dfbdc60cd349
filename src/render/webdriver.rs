use crate::render::{RenderError, Renderer};
use fantoccini::{Client, ClientBuilder};
use url::Url;

/// Renderer backed by a single WebDriver session
pub struct WebDriverRenderer {
    client: Client,
}

impl WebDriverRenderer {
    /// Connects to a WebDriver server, trying `webdriver_url` first and then
    /// a list of common fallback addresses.
    pub async fn connect(webdriver_url: &str) -> Result<Self, RenderError> {
        match ClientBuilder::native().connect(webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                return Ok(Self { client });
            }
            Err(e) => {
                ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            }
        }

        // If we couldn't connect, try with common alternative URLs
        let fallback_urls = [
            "http://localhost:9515", // ChromeDriver default
            "http://localhost:4723", // Appium default
            "http://localhost:9222", // Chrome debug port default
            "http://127.0.0.1:4444", // Try with IP instead of localhost
        ];

        for url in fallback_urls.iter() {
            if *url == webdriver_url {
                continue; // Skip if it's the same as the one we already tried
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = ClientBuilder::native().connect(url).await {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Ok(Self { client });
            }
        }

        Err(format!(
            "could not connect to any WebDriver server (tried {} and common fallbacks); \
             make sure one is running or set the WEBDRIVER_URL environment variable",
            webdriver_url
        )
        .into())
    }

    /// Ends the WebDriver session. Called once, at the end of a run.
    pub async fn close(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }
    }
}

impl Renderer for WebDriverRenderer {
    async fn render(&mut self, url: &Url) -> Result<String, RenderError> {
        self.client.goto(url.as_str()).await?;
        let source = self.client.source().await?;
        Ok(source)
    }
}
