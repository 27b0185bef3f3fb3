//! Login form state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginPage` owns a `RwSignal<LoginPhase>` and drives it through
//! `LoginPhase::on_submit` and `run_exchange`. Validation failures never reach
//! the gateway; every failure ends in `Error` with a user-facing message, and
//! `Error` always accepts another submission.
//!
//! The exchange is not cancelled when the page unmounts. The page flips its
//! `Liveness` on cleanup; a late resolution still commits to the session but
//! no phase is returned for the closed form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::session::Session;
use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::transport::Transport;
use crate::net::types::{LoginRequest, LoginResponse};

pub const MISSING_INPUT_MESSAGE: &str = "Please enter both username and Sleeper ID";
pub const GENERIC_FAILURE_MESSAGE: &str = "Login failed. Please check your credentials.";
pub const STORAGE_FAILURE_MESSAGE: &str = "Could not save your session in this browser. Check storage settings and try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Error(String),
    Success,
}

impl LoginPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Handle a form submission.
    ///
    /// `Ok` carries the trimmed request; the caller moves to `Submitting` and
    /// runs the exchange. `Err` is the phase to show instead: unchanged while
    /// already submitting or signed in, `Error` for missing input.
    ///
    /// # Errors
    ///
    /// Returns the phase to display when no exchange should start.
    pub fn on_submit(&self, handle: &str, external_id: &str) -> Result<LoginRequest, LoginPhase> {
        if matches!(self, Self::Submitting | Self::Success) {
            return Err(self.clone());
        }
        validate_login_input(handle, external_id)
            .map(|(username, sleeper_id)| LoginRequest { username, sleeper_id })
            .map_err(|message| Self::Error(message.to_owned()))
    }
}

/// Trim both inputs and require each to be non-empty.
///
/// # Errors
///
/// Returns the message to show when either field is blank.
pub fn validate_login_input(handle: &str, external_id: &str) -> Result<(String, String), &'static str> {
    let handle = handle.trim();
    let external_id = external_id.trim();
    if handle.is_empty() || external_id.is_empty() {
        return Err(MISSING_INPUT_MESSAGE);
    }
    Ok((handle.to_owned(), external_id.to_owned()))
}

/// Remote message when the API sent one, else a generic prompt.
pub fn failure_message(err: &ApiError) -> String {
    err.remote_message().unwrap_or(GENERIC_FAILURE_MESSAGE).to_owned()
}

/// Cleared when the owning view is torn down.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Liveness {
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Exchange an accepted submission and commit the result.
///
/// Returns the phase to show next, or `None` when the view went away while
/// the exchange was in flight. The session is updated either way.
pub async fn run_exchange<T: Transport>(
    gateway: &Gateway<T>,
    session: &Session,
    request: LoginRequest,
    alive: &Liveness,
) -> Option<LoginPhase> {
    session.begin_exchange();
    let next = match gateway.login(&request.username, &request.sleeper_id).await {
        Ok(LoginResponse { token, user }) => match session.commit(token, user) {
            Ok(()) => LoginPhase::Success,
            Err(e) => {
                log::warn!("login for {} not kept: {e}", request.username);
                LoginPhase::Error(STORAGE_FAILURE_MESSAGE.to_owned())
            }
        },
        Err(err) => {
            session.end_exchange();
            log::warn!("login for {} failed: {err}", request.username);
            LoginPhase::Error(failure_message(&err))
        }
    };

    if !alive.is_alive() {
        log::debug!("login for {} resolved after the form closed", request.username);
        return None;
    }
    Some(next)
}
