//! Waiver wire page: free agents ranked by the analytics service.

#[cfg(test)]
#[path = "waiver_wire_test.rs"]
mod waiver_wire_test;

use leptos::prelude::*;

use crate::app::AppGateway;
use crate::net::api;
use crate::net::types::WaiverWirePlayer;
use crate::state::remote::{Remote, load_into};
use crate::util::format::{percent, points_or_dash};

/// Highest recommendation score first; ties keep a stable name order.
pub fn rank_recommendations(mut players: Vec<WaiverWirePlayer>) -> Vec<WaiverWirePlayer> {
    players.sort_by(|a, b| {
        b.recommendation_score
            .total_cmp(&a.recommendation_score)
            .then_with(|| a.name.cmp(&b.name))
    });
    players
}

#[component]
pub fn WaiverWirePage() -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    let candidates = RwSignal::new(Remote::<Vec<WaiverWirePlayer>>::Loading);

    load_into(candidates, move || async move {
        api::fetch_waiver_wire(&gateway).await.map(rank_recommendations)
    });

    view! {
        <div class="waiver-page">
            <h1 class="page-title">"Waiver Wire"</h1>
            {move || match candidates.get() {
                Remote::Loading => view! { <p class="page-status">"Loading recommendations..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="page-status page-status--error">{message}</p> }.into_any(),
                Remote::Ready(list) if list.is_empty() => {
                    view! { <p class="page-status">"No pickups recommended right now."</p> }.into_any()
                }
                Remote::Ready(list) => view! {
                    <ol class="waiver-list">
                        {list
                            .into_iter()
                            .map(|player| view! {
                                <li class="waiver-card">
                                    <div class="waiver-card__head">
                                        <span class="waiver-card__name">{player.name}</span>
                                        <span class="waiver-card__meta">{format!("{} · {}", player.position, player.team)}</span>
                                        <span class="waiver-card__score">{format!("{:.1}", player.recommendation_score)}</span>
                                    </div>
                                    <p class="waiver-card__reason">{player.reason}</p>
                                    <div class="waiver-card__stats">
                                        <span>"Proj " {points_or_dash(player.projected_points)}</span>
                                        <span>"Avail " {percent(player.availability)}</span>
                                    </div>
                                </li>
                            })
                            .collect::<Vec<_>>()}
                    </ol>
                }
                .into_any(),
            }}
        </div>
    }
}
