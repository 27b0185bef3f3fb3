//! Route gating on session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route and the login route apply the same decision so no
//! page can drift from the "authenticated = credential AND principal" rule.
//! While the session is loading the guard decides nothing: protected content
//! stays hidden and no redirect fires, so a restore in progress is neither
//! flashed nor discarded.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Kind of view being gated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    /// The unauthenticated entry point.
    Login,
    /// Any view that requires a signed-in user.
    Protected,
}

impl ViewKind {
    pub const LOGIN_PATH: &'static str = "/login";
    /// Landing view after sign-in.
    pub const DEFAULT_PATH: &'static str = "/dashboard";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Session is still loading; render a placeholder, do not redirect.
    Pending,
    Redirect(&'static str),
}

pub fn decide(state: &SessionState, view: ViewKind) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    match (view, state.is_authenticated()) {
        (ViewKind::Protected, true) | (ViewKind::Login, false) => GuardDecision::Allow,
        (ViewKind::Protected, false) => GuardDecision::Redirect(ViewKind::LOGIN_PATH),
        (ViewKind::Login, true) => GuardDecision::Redirect(ViewKind::DEFAULT_PATH),
    }
}

/// Navigate away whenever the guard decides `view` must not be shown.
pub fn install_guard_redirect<F>(session: RwSignal<SessionState>, view: ViewKind, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decide(&session.get(), view) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
