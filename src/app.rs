//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::protected::{AuthFailureRedirect, Protected};
use crate::config::ClientConfig;
use crate::net::gateway::{Gateway, clear_and_redirect};
use crate::net::transport::BrowserTransport;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, players::PlayersPage, teams::TeamsPage, waiver_wire::WaiverWirePage,
};
use crate::state::session::Session;
use crate::state::store::CredentialStore;
use crate::util::guard::ViewKind;

/// Gateway type provided through context.
pub type AppGateway = Gateway<BrowserTransport>;

/// Navigation requested from outside the router (the gateway's 401 hook).
#[derive(Clone, Copy)]
pub struct PendingRedirect(pub RwSignal<Option<&'static str>>);

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session, bridges it into a signal for views, wires the gateway's
/// auth-failure hook, and restores any stored session once mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("invalid build config, using defaults: {e}");
        ClientConfig::default()
    });

    let session = Session::new(CredentialStore::browser());
    let session_state = RwSignal::new(session.snapshot());
    session.subscribe(move |state| session_state.set(state.clone()));

    let redirect = RwSignal::new(None::<&'static str>);
    let on_auth_failure = clear_and_redirect(session.clone(), move || redirect.set(Some(ViewKind::LOGIN_PATH)));
    let gateway: AppGateway = Gateway::new(BrowserTransport, &config, session.credential_slot(), on_auth_failure);

    provide_context(session_state);
    provide_context(session.clone());
    provide_context(gateway);
    provide_context(PendingRedirect(redirect));

    // Storage is browser-only, so restore after mount rather than during SSR.
    Effect::new(move || session.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/sleepr-web.css"/>
        <Title text="Sleepr"/>

        <Router>
            <AuthFailureRedirect/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=ViewKind::DEFAULT_PATH/> }/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Protected><Layout><DashboardPage/></Layout></Protected> }
                />
                <Route
                    path=StaticSegment("teams")
                    view=|| view! { <Protected><Layout><TeamsPage/></Layout></Protected> }
                />
                <Route
                    path=StaticSegment("players")
                    view=|| view! { <Protected><Layout><PlayersPage/></Layout></Protected> }
                />
                <Route
                    path=StaticSegment("waiver-wire")
                    view=|| view! { <Protected><Layout><WaiverWirePage/></Layout></Protected> }
                />
            </Routes>
        </Router>
    }
}
