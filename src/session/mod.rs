//! Session state controller
//!
//! A two-state machine (anonymous / authenticated) deciding, for each view in
//! traversal order, whether a login or logout transition must happen before
//! navigation. Transitions fire only at `requires_auth` boundaries, so one
//! session is preserved across runs of same-type views.

use std::fmt;
use url::Url;

use crate::browser::PageDriver;
use crate::catalog::{ViewDescriptor, LOGIN_PATH, LOGOUT_PATH};
use crate::{Result, SnapError};

/// CSS selector for the login form's username field
pub const USERNAME_SELECTOR: &str = "#id_login";

/// CSS selector for the login form's password field
pub const PASSWORD_SELECTOR: &str = "#id_password";

/// CSS selector for the login form's submit control
pub const SIGN_IN_SELECTOR: &str = "#id--sign-in";

/// Login identity and secret submitted to the fixed login endpoint
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// Keeps the plaintext password out of debug/log output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Whether the crawling browser currently holds an authenticated session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Anonymous => write!(f, "anonymous"),
            SessionState::Authenticated => write!(f, "authenticated"),
        }
    }
}

/// Drives login/logout transitions at auth-requirement boundaries
pub struct SessionController {
    state: SessionState,
    login_url: Url,
    logout_url: Url,
    credentials: Option<Credentials>,
}

impl SessionController {
    /// Creates a controller in the `Anonymous` state
    ///
    /// The initial state is always anonymous regardless of the first view's
    /// requirement; `reconcile` runs before the first navigation.
    pub fn new(base_url: &Url, credentials: Option<Credentials>) -> Result<Self> {
        Ok(Self {
            state: SessionState::Anonymous,
            login_url: base_url.join(LOGIN_PATH)?,
            logout_url: base_url.join(LOGOUT_PATH)?,
            credentials,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Reconciles session state with the upcoming view's auth requirement
    ///
    /// No transition happens when the current state already satisfies the
    /// requirement. A transition is atomic from the caller's perspective:
    /// either the session is fully logged in/out before the next navigation,
    /// or the crawl fails.
    pub async fn reconcile(
        &mut self,
        view: &ViewDescriptor,
        driver: &mut dyn PageDriver,
    ) -> Result<()> {
        match (self.state, view.requires_auth) {
            (SessionState::Anonymous, true) => self.login(view, driver).await,
            (SessionState::Authenticated, false) => self.logout(driver).await,
            _ => Ok(()),
        }
    }

    /// Submits credentials to the fixed login endpoint
    async fn login(&mut self, view: &ViewDescriptor, driver: &mut dyn PageDriver) -> Result<()> {
        let credentials =
            self.credentials
                .as_ref()
                .ok_or_else(|| SnapError::MissingCredentials {
                    view: view.name.clone(),
                })?;

        tracing::info!("Signing in as {}", credentials.username);

        driver
            .goto(self.login_url.as_str())
            .await
            .map_err(SnapError::LoginFailed)?;
        driver
            .type_into(USERNAME_SELECTOR, &credentials.username)
            .await
            .map_err(SnapError::LoginFailed)?;
        driver
            .type_into(PASSWORD_SELECTOR, &credentials.password)
            .await
            .map_err(SnapError::LoginFailed)?;
        driver
            .click_and_wait(SIGN_IN_SELECTOR)
            .await
            .map_err(SnapError::LoginFailed)?;

        self.state = SessionState::Authenticated;
        Ok(())
    }

    /// Navigates to the fixed logout endpoint
    async fn logout(&mut self, driver: &mut dyn PageDriver) -> Result<()> {
        tracing::info!("Signing out");

        driver
            .goto(self.logout_url.as_str())
            .await
            .map_err(SnapError::LogoutFailed)?;

        self.state = SessionState::Anonymous;
        Ok(())
    }
}
