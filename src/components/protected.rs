//! Route wrappers that apply the session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through `Protected`, so the "authenticated"
//! rule and the loading placeholder live in one place. `AuthFailureRedirect`
//! sits inside the router and performs navigations requested by the gateway.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::PendingRedirect;
use crate::state::session::SessionState;
use crate::util::guard::{GuardDecision, ViewKind, decide, install_guard_redirect};

/// Render `children` only for a signed-in user; otherwise show a placeholder
/// and, once loading has finished, redirect to `/login`.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_guard_redirect(session, ViewKind::Protected, use_navigate());

    view! {
        <Show
            when=move || decide(&session.get(), ViewKind::Protected) == GuardDecision::Allow
            fallback=move || {
                view! {
                    <div class="page-placeholder">
                        <p>{move || if session.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Perform navigations queued in `PendingRedirect`.
#[component]
pub fn AuthFailureRedirect() -> impl IntoView {
    let PendingRedirect(pending) = expect_context::<PendingRedirect>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(path) = pending.get() {
            pending.set(None);
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
