//! Crawl orchestration
//!
//! The orchestrator resolves a view selector against the catalog, drives the
//! session state controller, substitutes URL tokens, navigates via the
//! browser capability, and hands each captured page to the sink. The crawl
//! is strictly sequential: one page, one descriptor at a time, because
//! authentication state is shared mutable context.

mod orchestrator;

pub use orchestrator::{CrawlRequest, Orchestrator};
