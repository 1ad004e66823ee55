//! Team and the payment-status lifecycle.

use crate::models::player::PlayerId;
use crate::models::tournament::{Tournament, TournamentId};
use crate::models::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

/// Payment progression for a team's entry fees. The intended order is
/// pending -> paid -> verified, but admins may set any value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Verified,
}

/// Snapshot of a player taken when the team registered. Not refreshed if
/// the player profile changes later.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamPlayer {
    pub player_id: PlayerId,
    pub player_name: String,
    pub player_unique_id: String,
}

/// A team registered by one owner for one tournament. At most one team per
/// (tournament, owner) pair.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub owner_id: UserId,
    pub owner_unique_id: String,
    pub players: Vec<TeamPlayer>,
    pub tournament_id: TournamentId,
    /// Set at registration, immutable afterwards.
    pub registration_date: DateTime<Utc>,
    pub payment_status: PaymentStatus,
}

/// A team joined with its tournament (for "my teams" listings).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamWithTournament {
    #[serde(flatten)]
    pub team: Team,
    pub tournament: Option<Tournament>,
}
