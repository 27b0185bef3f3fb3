//! REST API helpers for the fantasy-football endpoints.
//!
//! Every helper goes through the `Gateway`, so the bearer header and the 401
//! sign-out policy apply uniformly; pages never build requests themselves.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` and render a message in place. An
//! `Unauthorized` result has already signed the user out, so pages only need
//! to stop loading.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::gateway::Gateway;
use super::transport::Transport;
use super::types::{HealthStatus, Player, Team, WaiverWirePlayer};

fn team_endpoint(team_id: i64) -> String {
    format!("/teams/{team_id}")
}

fn team_sync_endpoint(team_id: i64) -> String {
    format!("/teams/{team_id}/sync")
}

fn player_endpoint(player_id: i64) -> String {
    format!("/players/{player_id}")
}

fn team_recommendations_endpoint(team_id: i64) -> String {
    format!("/analytics/teams/{team_id}/recommendations")
}

fn player_projection_endpoint(player_id: i64) -> String {
    format!("/analytics/players/{player_id}/projection")
}

const TEAMS_ENDPOINT: &str = "/teams";
const PLAYERS_ENDPOINT: &str = "/players";
const WAIVER_WIRE_ENDPOINT: &str = "/public/analytics/waiver-wire";
const HEALTH_ENDPOINT: &str = "/health";

/// # Errors
///
/// Any gateway error.
pub async fn fetch_teams<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Team>, ApiError> {
    gateway.get_json(TEAMS_ENDPOINT).await
}

/// # Errors
///
/// Any gateway error.
pub async fn fetch_team<T: Transport>(gateway: &Gateway<T>, team_id: i64) -> Result<Team, ApiError> {
    gateway.get_json(&team_endpoint(team_id)).await
}

/// Ask the API to pull a team's latest roster from Sleeper.
///
/// # Errors
///
/// Any gateway error.
pub async fn sync_team<T: Transport>(gateway: &Gateway<T>, team_id: i64) -> Result<(), ApiError> {
    gateway.post_empty(&team_sync_endpoint(team_id)).await
}

/// # Errors
///
/// Any gateway error.
pub async fn fetch_players<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Player>, ApiError> {
    gateway.get_json(PLAYERS_ENDPOINT).await
}

/// # Errors
///
/// Any gateway error.
pub async fn fetch_player<T: Transport>(gateway: &Gateway<T>, player_id: i64) -> Result<Player, ApiError> {
    gateway.get_json(&player_endpoint(player_id)).await
}

/// # Errors
///
/// Any gateway error.
pub async fn fetch_waiver_wire<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<WaiverWirePlayer>, ApiError> {
    gateway.get_json(WAIVER_WIRE_ENDPOINT).await
}

/// Free-form recommendations for one team.
///
/// # Errors
///
/// Any gateway error.
pub async fn fetch_team_recommendations<T: Transport>(
    gateway: &Gateway<T>,
    team_id: i64,
) -> Result<serde_json::Value, ApiError> {
    gateway.get_json(&team_recommendations_endpoint(team_id)).await
}

/// Free-form projection for one player.
///
/// # Errors
///
/// Any gateway error.
pub async fn fetch_player_projection<T: Transport>(
    gateway: &Gateway<T>,
    player_id: i64,
) -> Result<serde_json::Value, ApiError> {
    gateway.get_json(&player_projection_endpoint(player_id)).await
}

/// # Errors
///
/// Any gateway error.
pub async fn health_check<T: Transport>(gateway: &Gateway<T>) -> Result<HealthStatus, ApiError> {
    gateway.get_json(HEALTH_ENDPOINT).await
}
