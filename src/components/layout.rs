//! Shared chrome for signed-in pages: navigation, identity, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Session, SessionState};
use crate::util::guard::ViewKind;

const NAV_LINKS: [(&str, &str); 4] = [
    ("/dashboard", "Dashboard"),
    ("/teams", "Teams"),
    ("/players", "Players"),
    ("/waiver-wire", "Waiver Wire"),
];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let display_name = move || {
        session_state
            .get()
            .principal
            .map(|p| p.greeting_name().to_owned())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session.clear();
        navigate(ViewKind::LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="layout">
            <header class="layout__header toolbar">
                <span class="toolbar__brand">"Sleepr"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <nav class="toolbar__nav">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <A href=href attr:class="toolbar__link">{label}</A> })
                        .collect::<Vec<_>>()}
                </nav>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">{display_name}</span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>
            <main class="layout__content">{children()}</main>
        </div>
    }
}
