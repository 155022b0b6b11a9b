//! Chromium-backed page driver
//!
//! Owns the launched browser process, the CDP event handler task, and the
//! single page reused for the whole crawl.

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;

use super::traits::{BrowserError, PageDriver};

/// Effectively unlimited budget for CDP requests
///
/// Navigation must never be cut short by a client-side deadline: slow
/// server-rendered pages have to finish loading before capture. The default
/// request timeout would fail `goto`/`wait_for_navigation` after ~30s.
const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(60 * 60 * 24);

/// A live Chromium session driving one page
pub struct ChromeSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: Page,
}

impl ChromeSession {
    /// Launches a browser and opens the page used for the crawl
    ///
    /// # Arguments
    ///
    /// * `headless` - run without a visible window (`--show` disables this)
    pub async fn launch(headless: bool) -> Result<Self, BrowserError> {
        let config = Self::config(headless)?;

        let (browser, mut handler) = Browser::launch(config).await?;

        // The handler stream must be polled for the lifetime of the session
        // or every CDP call stalls.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error: {}", e);
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        Ok(Self {
            browser,
            handler_task,
            page,
        })
    }

    fn config(headless: bool) -> Result<BrowserConfig, BrowserError> {
        let mut builder = BrowserConfig::builder().request_timeout(NAVIGATION_TIMEOUT);
        if !headless {
            builder = builder.with_head();
        }
        builder.build().map_err(BrowserError::Launch)
    }
}

#[async_trait]
impl PageDriver for ChromeSession {
    async fn goto(&mut self, url: &str) -> Result<(), BrowserError> {
        self.page.goto(url).await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    async fn content(&mut self) -> Result<String, BrowserError> {
        Ok(self.page.content().await?)
    }

    async fn type_into(&mut self, selector: &str, text: &str) -> Result<(), BrowserError> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| BrowserError::ElementNotFound {
                selector: selector.to_string(),
            })?;
        element.click().await?;
        element.type_str(text).await?;
        Ok(())
    }

    async fn click_and_wait(&mut self, selector: &str) -> Result<(), BrowserError> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| BrowserError::ElementNotFound {
                selector: selector.to_string(),
            })?;

        // Dispatch the click and the navigation wait together; awaiting them
        // sequentially races against the page load.
        let (nav, click) = tokio::join!(self.page.wait_for_navigation(), element.click());
        click?;
        nav?;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), BrowserError> {
        self.browser.close().await?;
        if let Err(e) = self.browser.wait().await {
            tracing::debug!("Browser process wait failed: {}", e);
        }
        self.handler_task.abort();
        Ok(())
    }
}
