//! Snapcrawl: a session-aware fixture capture crawler
//!
//! This crate captures rendered HTML snapshots of a target web application's
//! pages for offline test-fixture generation. It resolves a requested subset
//! of a static view catalog, maintains a single authenticated browser session
//! across the traversal, substitutes placeholder tokens in each view's URL
//! template, and persists the rendered markup to a predictable file path.

pub mod browser;
pub mod catalog;
pub mod crawler;
pub mod output;
pub mod session;
pub mod tokens;

use thiserror::Error;

/// Main error type for snapcrawl operations
#[derive(Debug, Error)]
pub enum SnapError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Browser error: {0}")]
    Browser(#[from] browser::BrowserError),

    #[error("Login required for view '{view}' but no credentials were supplied")]
    MissingCredentials { view: String },

    #[error("Login failed: {0}")]
    LoginFailed(browser::BrowserError),

    #[error("Logout failed: {0}")]
    LogoutFailed(browser::BrowserError),

    #[error("Navigation failed for {url}: {source}")]
    Navigation {
        url: String,
        source: browser::BrowserError,
    },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Catalog construction errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate view name in catalog: {0}")]
    DuplicateName(String),

    #[error("View '{name}' declares requires_auth={requires_auth} but belongs to group '{group}'")]
    AuthMismatch {
        name: String,
        group: String,
        requires_auth: bool,
    },
}

/// Result type alias for snapcrawl operations
pub type Result<T> = std::result::Result<T, SnapError>;

// Re-export commonly used types
pub use browser::{BrowserError, PageDriver};
pub use catalog::{Catalog, ViewDescriptor, ViewGroup};
pub use crawler::{CrawlRequest, Orchestrator};
pub use output::{CaptureOutcome, CaptureReport, CaptureSink};
pub use session::{SessionController, SessionState};
pub use tokens::{substitute, Token, TokenMap};
