//! Browser capability seam
//!
//! The crawler treats browser automation as an external capability: launch a
//! browser, navigate, read rendered markup, drive the login form, close. The
//! `PageDriver` trait is that seam; `ChromeSession` is the chromiumoxide-backed
//! implementation used by the CLI. Tests substitute an in-memory fake.

mod chrome;
mod traits;

pub use chrome::ChromeSession;
pub use traits::{BrowserError, PageDriver};
