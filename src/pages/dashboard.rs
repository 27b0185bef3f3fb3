//! Dashboard page: greeting, league summary, and API status.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the user's teams once on
//! mount and folds them into a few headline numbers.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::app::AppGateway;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::{HealthStatus, Team};
use crate::state::remote::{Remote, load_into};
use crate::state::session::SessionState;
use crate::util::format::points;

/// Headline numbers across every team the user owns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeamsSummary {
    pub teams: usize,
    pub dynasty: usize,
    pub wins: u32,
    pub losses: u32,
    pub points_for: f64,
}

impl TeamsSummary {
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }
}

pub fn summarize_teams(teams: &[Team]) -> TeamsSummary {
    teams.iter().fold(TeamsSummary::default(), |mut acc, team| {
        acc.teams += 1;
        acc.dynasty += usize::from(team.is_dynasty);
        acc.wins += team.wins.unwrap_or(0);
        acc.losses += team.losses.unwrap_or(0);
        acc.points_for += team.points_for.unwrap_or(0.0);
        acc
    })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let gateway = expect_context::<AppGateway>();

    let teams = RwSignal::new(Remote::<Vec<Team>>::Loading);
    let health = RwSignal::new(Remote::<HealthStatus>::Loading);

    let teams_gateway = gateway.clone();
    load_into(teams, move || async move { api::fetch_teams(&teams_gateway).await });
    load_into(health, move || async move { api::health_check(&gateway).await });

    let greeting = move || {
        session
            .get()
            .principal
            .map(|p| format!("Welcome back, {}", p.greeting_name()))
            .unwrap_or_else(|| "Welcome back".to_owned())
    };

    let summary = Memo::new(move |_| teams.with(|r| r.ready().map(|t| summarize_teams(t.as_slice())).unwrap_or_default()));

    view! {
        <div class="dashboard-page">
            <h1 class="page-title">{greeting}</h1>
            {move || match teams.get() {
                Remote::Loading => view! { <p class="page-status">"Loading teams..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="page-status page-status--error">{message}</p> }.into_any(),
                Remote::Ready(_) => view! {
                    <div class="dashboard-page__stats">
                        <StatCard label="Teams" value=Signal::derive(move || summary.get().teams.to_string())/>
                        <StatCard
                            label="Dynasty"
                            value=Signal::derive(move || summary.get().dynasty.to_string())
                            hint="keeper leagues"
                        />
                        <StatCard label="Record" value=Signal::derive(move || summary.get().record())/>
                        <StatCard label="Points For" value=Signal::derive(move || points(summary.get().points_for))/>
                    </div>
                }
                .into_any(),
            }}
            <footer class="dashboard-page__footer">
                {move || match health.get() {
                    Remote::Ready(status) => format!("API {} ({})", status.status, status.version),
                    Remote::Failed(_) => "API unreachable".to_owned(),
                    Remote::Loading => String::new(),
                }}
            </footer>
        </div>
    }
}
