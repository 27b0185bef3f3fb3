//! Login page exchanging a username and Sleeper ID for a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. A signed-in visitor is bounced to the default view by the
//! guard, which also takes the user there once an exchange commits.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppGateway;
use crate::state::login::{Liveness, LoginPhase, run_exchange};
use crate::state::session::{Session, SessionState};
use crate::util::guard::{ViewKind, install_guard_redirect};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let session = expect_context::<Session>();
    let gateway = expect_context::<AppGateway>();
    install_guard_redirect(session_state, ViewKind::Login, use_navigate());

    let handle = RwSignal::new(String::new());
    let external_id = RwSignal::new(String::new());
    let phase = RwSignal::new(LoginPhase::Idle);

    let alive = Liveness::default();
    on_cleanup({
        let alive = alive.clone();
        move || alive.end()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match phase
            .get_untracked()
            .on_submit(&handle.get_untracked(), &external_id.get_untracked())
        {
            Ok(request) => request,
            Err(next) => {
                phase.set(next);
                return;
            }
        };
        phase.set(LoginPhase::Submitting);

        let gateway = gateway.clone();
        let session = session.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            if let Some(next) = run_exchange(&gateway, &session, request, &alive).await {
                let _ = phase.try_set(next);
            }
        });
    };

    let submitting = move || phase.get().is_submitting();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sleepr"</h1>
                <p class="login-card__subtitle">"Dynasty fantasy football, sorted."</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="login-username">"Username"</label>
                    <input
                        id="login-username"
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Your username"
                        prop:value=move || handle.get()
                        on:input=move |ev| handle.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="login-sleeper-id">"Sleeper ID"</label>
                    <input
                        id="login-sleeper-id"
                        class="login-input"
                        type="text"
                        placeholder="123456789"
                        prop:value=move || external_id.get()
                        on:input=move |ev| external_id.set(event_target_value(&ev))
                    />
                    <p class="login-hint">
                        "Your Sleeper ID is in the Sleeper app under Settings, then Account."
                    </p>
                    <button class="login-button" type="submit" disabled=submitting>
                        {move || if submitting() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || phase.get().error_message().is_some()>
                    <p class="login-message login-message--error" role="alert">
                        {move || phase.get().error_message().unwrap_or_default().to_owned()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
