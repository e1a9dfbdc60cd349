pub mod webdriver;

use url::Url;

/// Error from a single render attempt
pub type RenderError = Box<dyn std::error::Error>;

/// Capability to fetch fully-rendered HTML for a URL.
///
/// Implementations are navigated serially: one render is in flight at a time,
/// and the same instance is reused for every page in a run.
#[allow(async_fn_in_trait)]
pub trait Renderer {
    /// Navigate to the URL and return the page source after client-side
    /// scripts have settled.
    async fn render(&mut self, url: &Url) -> Result<String, RenderError>;
}
