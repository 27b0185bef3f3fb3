//! Teams page: standings, Sleeper sync, and per-team recommendations.

#[cfg(test)]
#[path = "teams_test.rs"]
mod teams_test;

use std::cmp::Ordering;

use leptos::prelude::*;

use crate::app::AppGateway;
use crate::net::api;
use crate::net::types::Team;
use crate::state::remote::{Remote, load_into};
use crate::util::format::{ordinal, points_or_dash};

/// Seeded teams first by seed, then by wins, then by name.
pub fn sort_by_standing(mut teams: Vec<Team>) -> Vec<Team> {
    teams.sort_by(|a, b| {
        let seed = match (a.playoff_position, b.playoff_position) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        seed.then_with(|| b.wins.unwrap_or(0).cmp(&a.wins.unwrap_or(0)))
            .then_with(|| a.name.cmp(&b.name))
    });
    teams
}

/// Pretty-print free-form analytics JSON for a `<pre>` block.
pub fn render_recommendations(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[component]
pub fn TeamsPage() -> impl IntoView {
    let gateway = expect_context::<AppGateway>();

    let teams = RwSignal::new(Remote::<Vec<Team>>::Loading);
    let sync_status = RwSignal::new(None::<String>);
    let syncing = RwSignal::new(None::<i64>);
    let recs_for = RwSignal::new(None::<i64>);
    let recs = RwSignal::new(Remote::<serde_json::Value>::Loading);

    let reload = {
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            load_into(teams, move || async move { api::fetch_teams(&gateway).await.map(sort_by_standing) });
        }
    };
    reload();

    let on_sync = {
        let gateway = gateway.clone();
        let reload = reload.clone();
        move |team: Team| {
            if syncing.get_untracked().is_some() {
                return;
            }
            syncing.set(Some(team.id));
            sync_status.set(None);
            let gateway = gateway.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                let message = match api::sync_team(&gateway, team.id).await {
                    Ok(()) => {
                        reload();
                        format!("Synced {} from Sleeper.", team.name)
                    }
                    Err(e) => {
                        log::warn!("sync of team {} failed: {e}", team.id);
                        format!("Sync failed: {}", e.remote_message().map_or_else(|| e.to_string(), str::to_owned))
                    }
                };
                let _ = sync_status.try_set(Some(message));
                let _ = syncing.try_set(None);
            });
        }
    };

    let on_recommendations = move |team_id: i64| {
        if recs_for.get_untracked() == Some(team_id) {
            recs_for.set(None);
            return;
        }
        recs_for.set(Some(team_id));
        let gateway = gateway.clone();
        load_into(recs, move || async move { api::fetch_team_recommendations(&gateway, team_id).await });
    };

    view! {
        <div class="teams-page">
            <h1 class="page-title">"My Teams"</h1>
            <Show when=move || sync_status.get().is_some()>
                <p class="page-status">{move || sync_status.get().unwrap_or_default()}</p>
            </Show>
            {move || match teams.get() {
                Remote::Loading => view! { <p class="page-status">"Loading teams..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="page-status page-status--error">{message}</p> }.into_any(),
                Remote::Ready(list) if list.is_empty() => {
                    view! { <p class="page-status">"No teams yet. Sync a league from Sleeper to get started."</p> }
                        .into_any()
                }
                Remote::Ready(list) => {
                    let on_sync = on_sync.clone();
                    let on_recommendations = on_recommendations.clone();
                    view! {
                        <ul class="team-list">
                            {list
                                .into_iter()
                                .map(|team| {
                                    let id = team.id;
                                    let on_sync = on_sync.clone();
                                    let on_recommendations = on_recommendations.clone();
                                    let is_dynasty = team.is_dynasty;
                                    let team_to_sync = team.clone();
                                    view! {
                                        <li class="team-card">
                                            <div class="team-card__head">
                                                <span class="team-card__name">{team.name.clone()}</span>
                                                <Show when=move || is_dynasty>
                                                    <span class="team-card__badge">"Dynasty"</span>
                                                </Show>
                                            </div>
                                            <div class="team-card__stats">
                                                <span>{team.record().unwrap_or_else(|| "—".to_owned())}</span>
                                                <span>"PF " {points_or_dash(team.points_for)}</span>
                                                <span>"PA " {points_or_dash(team.points_against)}</span>
                                                <span>{team.playoff_position.map(|p| format!("{} seed", ordinal(p)))}</span>
                                            </div>
                                            <div class="team-card__actions">
                                                <button
                                                    class="btn"
                                                    disabled=move || syncing.get().is_some()
                                                    on:click=move |_| on_sync(team_to_sync.clone())
                                                >
                                                    {move || if syncing.get() == Some(id) { "Syncing..." } else { "Sync" }}
                                                </button>
                                                <button class="btn" on:click=move |_| on_recommendations(id)>
                                                    "Recommendations"
                                                </button>
                                            </div>
                                            <Show when=move || recs_for.get() == Some(id)>
                                                <div class="team-card__recs">
                                                    {move || match recs.get() {
                                                        Remote::Loading => "Loading recommendations...".to_owned(),
                                                        Remote::Failed(message) => message,
                                                        Remote::Ready(value) => render_recommendations(&value),
                                                    }}
                                                </div>
                                            </Show>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
