//! The page driver trait abstracting browser automation

use async_trait::async_trait;
use thiserror::Error;

/// Browser automation errors
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Failed to configure browser: {0}")]
    Launch(String),

    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("CDP error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),
}

/// The external browser capability consumed by the crawler
///
/// One implementor drives one browser page for the duration of a crawl. All
/// methods are suspension points; the crawl yields while the browser works.
/// `close` releases the underlying session and is called exactly once by the
/// session owner, on every exit path.
#[async_trait]
pub trait PageDriver: Send {
    /// Navigates to `url` and waits for the page's load-complete signal
    ///
    /// No timeout ceiling is imposed: slow server-rendered pages must not be
    /// truncated during fixture capture.
    async fn goto(&mut self, url: &str) -> Result<(), BrowserError>;

    /// Returns the fully rendered markup of the current page
    async fn content(&mut self) -> Result<String, BrowserError>;

    /// Types `text` into the element matching the CSS `selector`
    async fn type_into(&mut self, selector: &str, text: &str) -> Result<(), BrowserError>;

    /// Clicks the element matching `selector` and awaits the resulting
    /// navigation
    ///
    /// The click dispatch and the navigation wait must be awaited together,
    /// not sequentially; otherwise navigation can complete before the wait is
    /// registered (or vice versa).
    async fn click_and_wait(&mut self, selector: &str) -> Result<(), BrowserError>;

    /// Releases the browser session
    async fn close(&mut self) -> Result<(), BrowserError>;
}
