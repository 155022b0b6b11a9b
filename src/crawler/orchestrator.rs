//! The crawl orchestrator

use std::path::PathBuf;
use url::Url;

use crate::browser::PageDriver;
use crate::catalog::{Catalog, ViewDescriptor};
use crate::output::{CaptureOutcome, CaptureReport, CaptureSink, ViewCapture};
use crate::session::{Credentials, SessionController};
use crate::tokens::{substitute, TokenMap};
use crate::{Result, SnapError};

/// Runtime parameters for one crawl
#[derive(Debug, Clone)]
pub struct CrawlRequest {
    /// View name, group name, or "all"
    pub selector: String,
    /// Root URL of the target application
    pub base_url: Url,
    /// Required only if a selected view requires auth
    pub credentials: Option<Credentials>,
    /// Token values substituted into URL templates
    pub tokens: TokenMap,
    /// Root the output tree hangs off
    pub project_root: PathBuf,
    /// Output root relative to the project root
    pub test_path: String,
    /// Output subfolder under the test path
    pub html_path: String,
    /// Run the browser without a visible window (`--show` disables)
    pub headless: bool,
}

/// Owns the browser session for the duration of one crawl
///
/// The session is acquired before `run` and released exactly once when the
/// traversal finishes, on every exit path including errors.
pub struct Orchestrator {
    catalog: Catalog,
    request: CrawlRequest,
    sink: CaptureSink,
    driver: Box<dyn PageDriver>,
}

impl Orchestrator {
    pub fn new(catalog: Catalog, request: CrawlRequest, driver: Box<dyn PageDriver>) -> Self {
        let sink = CaptureSink::new(
            &request.project_root,
            &request.test_path,
            &request.html_path,
        );
        Self {
            catalog,
            request,
            sink,
            driver,
        }
    }

    /// Runs the crawl to completion or first fatal error
    ///
    /// An unknown selector resolves to an empty list and the crawl is a
    /// no-op success. Navigation and login/logout failures abort the
    /// remaining traversal; fixtures already written stay on disk (capture
    /// is append-only, not transactional). Sink write failures are recorded
    /// in the report and do not abort.
    pub async fn run(mut self) -> Result<CaptureReport> {
        let views: Vec<ViewDescriptor> = self
            .catalog
            .resolve(&self.request.selector)
            .into_iter()
            .cloned()
            .collect();

        let result = if views.is_empty() {
            tracing::info!("No views match selector '{}'", self.request.selector);
            Ok(CaptureReport::new())
        } else {
            self.traverse(&views).await
        };

        // Release the browser session exactly once, success or failure.
        if let Err(e) = self.driver.close().await {
            tracing::warn!("Failed to close browser session: {}", e);
        }

        result
    }

    async fn traverse(&mut self, views: &[ViewDescriptor]) -> Result<CaptureReport> {
        let mut session =
            SessionController::new(&self.request.base_url, self.request.credentials.clone())?;
        let mut report = CaptureReport::new();

        for view in views {
            session.reconcile(view, self.driver.as_mut()).await?;

            let relative = substitute(&view.url_template, &self.request.tokens);
            // Unsupplied tokens survive substitution; the join percent-encodes
            // their angle brackets (`%3Copinion_id%3E`) and the request fails
            // at the server, not here.
            let url = self.request.base_url.join(&relative)?;

            tracing::info!("Scraping {}: {}", url, view.name);

            self.driver
                .goto(url.as_str())
                .await
                .map_err(|source| SnapError::Navigation {
                    url: url.to_string(),
                    source,
                })?;
            let html = self
                .driver
                .content()
                .await
                .map_err(|source| SnapError::Navigation {
                    url: url.to_string(),
                    source,
                })?;

            let outcome = match self.sink.write(&view.name, &html) {
                Ok(path) => CaptureOutcome::Saved(path),
                Err(e) => {
                    tracing::error!("Failed to save fixture for {}: {}", view.name, e);
                    CaptureOutcome::WriteFailed(e.to_string())
                }
            };
            report.push(ViewCapture {
                name: view.name.clone(),
                url: url.to_string(),
                outcome,
            });
        }

        Ok(report)
    }
}
