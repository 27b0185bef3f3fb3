//! Players page: filterable player table with on-demand projections.

#[cfg(test)]
#[path = "players_test.rs"]
mod players_test;

use leptos::prelude::*;

use crate::app::AppGateway;
use crate::net::api;
use crate::net::types::Player;
use crate::state::remote::{Remote, load_into};
use crate::util::format::points;

pub const ALL_POSITIONS: &str = "ALL";

/// Positions present in `players`, sorted, for the filter dropdown.
pub fn positions(players: &[Player]) -> Vec<String> {
    let mut found: Vec<String> = players.iter().map(|p| p.position.clone()).collect();
    found.sort();
    found.dedup();
    found
}

/// Players at `position` (or all of them), highest scorers first.
pub fn filter_players(players: &[Player], position: &str) -> Vec<Player> {
    let mut kept: Vec<Player> = players
        .iter()
        .filter(|p| position == ALL_POSITIONS || p.position.eq_ignore_ascii_case(position))
        .cloned()
        .collect();
    kept.sort_by(|a, b| b.fantasy_points.total_cmp(&a.fantasy_points));
    kept
}

#[component]
pub fn PlayersPage() -> impl IntoView {
    let gateway = expect_context::<AppGateway>();

    let players = RwSignal::new(Remote::<Vec<Player>>::Loading);
    let position = RwSignal::new(ALL_POSITIONS.to_owned());
    let projection_for = RwSignal::new(None::<i64>);
    let projection = RwSignal::new(Remote::<serde_json::Value>::Loading);

    let list_gateway = gateway.clone();
    load_into(players, move || async move { api::fetch_players(&list_gateway).await });

    let on_projection = move |player_id: i64| {
        if projection_for.get_untracked() == Some(player_id) {
            projection_for.set(None);
            return;
        }
        projection_for.set(Some(player_id));
        let gateway = gateway.clone();
        load_into(projection, move || async move { api::fetch_player_projection(&gateway, player_id).await });
    };

    let position_options = move || players.with(|r| r.ready().map(|list| positions(list)).unwrap_or_default());

    view! {
        <div class="players-page">
            <div class="page-header">
                <h1 class="page-title">"Players"</h1>
                <select
                    class="page-filter"
                    prop:value=move || position.get()
                    on:change=move |ev| position.set(event_target_value(&ev))
                >
                    <option value=ALL_POSITIONS>"All positions"</option>
                    {move || {
                        position_options()
                            .into_iter()
                            .map(|pos| view! { <option value=pos.clone()>{pos.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>
            {move || match players.get() {
                Remote::Loading => view! { <p class="page-status">"Loading players..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="page-status page-status--error">{message}</p> }.into_any(),
                Remote::Ready(list) => {
                    let rows = filter_players(&list, &position.get());
                    let on_projection = on_projection.clone();
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Pos"</th>
                                    <th>"Team"</th>
                                    <th>"Points"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|player| {
                                        let id = player.id;
                                        let on_projection = on_projection.clone();
                                        view! {
                                            <tr>
                                                <td>{player.name}</td>
                                                <td>{player.position}</td>
                                                <td>{player.team}</td>
                                                <td>{points(player.fantasy_points)}</td>
                                                <td>
                                                    <button class="btn btn--small" on:click=move |_| on_projection(id)>
                                                        "Projection"
                                                    </button>
                                                </td>
                                            </tr>
                                            <Show when=move || projection_for.get() == Some(id)>
                                                <tr class="data-table__detail">
                                                    <td colspan="5">
                                                        <pre>
                                                            {move || match projection.get() {
                                                                Remote::Loading => "Loading projection...".to_owned(),
                                                                Remote::Failed(message) => message,
                                                                Remote::Ready(value) => serde_json::to_string_pretty(&value)
                                                                    .unwrap_or_else(|_| value.to_string()),
                                                            }}
                                                        </pre>
                                                    </td>
                                                </tr>
                                            </Show>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
