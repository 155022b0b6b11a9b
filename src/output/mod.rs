//! Output handling: fixture persistence and the per-run capture report
//!
//! The sink writes each captured page to a deterministic path; the report
//! records which views were saved and which failed to save so the operator
//! gets a success/failure summary after the crawl.

mod report;
mod sink;

pub use report::{CaptureOutcome, CaptureReport, ViewCapture};
pub use sink::CaptureSink;
