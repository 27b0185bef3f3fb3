//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the remote API's JSON payloads so serde round-trips stay
//! lossless. `Credential` is a newtype so a bearer token can never be confused
//! with any other string flowing through the UI.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Opaque bearer token issued by the login exchange.
///
/// Replace-only: a new credential is installed in place of the old one, it is
/// never edited.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` request header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens must not leak into logs through `{:?}`.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// The signed-in account as returned by the login exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Numeric account identifier.
    pub id: i64,
    /// Handle the user signed in with.
    pub username: String,
    /// Human-friendly name shown in the UI.
    pub display_name: String,
    /// Account identifier on Sleeper.
    pub sleeper_id: String,
    /// Contact address, if the account has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Principal {
    /// Name to greet the user with, falling back to the handle.
    pub fn greeting_name(&self) -> &str {
        if self.display_name.trim().is_empty() { &self.username } else { &self.display_name }
    }
}

/// Body of `POST /public/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub sleeper_id: String,
}

/// Successful login exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: Credential,
    pub user: Principal,
}

/// Successful `POST /auth/refresh`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub token: Credential,
}

/// Error envelope the API attaches to non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ErrorBody {
    /// Human-readable message, preferring `message` over `error`.
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.trim().is_empty())
            .or(self.error.filter(|e| !e.trim().is_empty()))
    }
}

/// A fantasy team owned by the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub owner: String,
    pub is_dynasty: bool,
    pub league_id: String,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub ties: Option<u32>,
    #[serde(default)]
    pub points_for: Option<f64>,
    #[serde(default)]
    pub points_against: Option<f64>,
    #[serde(default)]
    pub playoff_position: Option<u32>,
}

impl Team {
    /// `W-L` or `W-L-T` record, when the league has reported one.
    pub fn record(&self) -> Option<String> {
        let (wins, losses) = (self.wins?, self.losses?);
        match self.ties {
            Some(ties) if ties > 0 => Some(format!("{wins}-{losses}-{ties}")),
            _ => Some(format!("{wins}-{losses}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub team: String,
    pub fantasy_points: f64,
}

/// A free agent worth picking up, with the analytics service's reasoning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaiverWirePlayer {
    pub player_id: i64,
    pub name: String,
    pub position: String,
    pub team: String,
    pub recommendation_score: f64,
    pub reason: String,
    #[serde(default)]
    pub projected_points: Option<f64>,
    #[serde(default)]
    pub availability: Option<f64>,
}

/// `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}
