//! Match, its scoring fields, and the match status progression.

use crate::models::team::TeamId;
use crate::models::tournament::TournamentId;
use crate::models::user::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Progression of a match: `Upcoming` at creation, `Live` during play,
/// `Completed` when done. The order is intent only; score updates may set
/// any status.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Live,
    Completed,
}

/// Which side is currently batting.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattingSide {
    Team1,
    Team2,
}

/// One fixture between two registered teams. Team names are denormalized at
/// creation and not refreshed if a team is later renamed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    pub team1_name: String,
    pub team2_name: String,
    /// Scheduled date, free text.
    pub match_date: String,
    pub status: MatchStatus,
    /// Free-text score line (e.g. "45/2"); not numerically validated.
    pub team1_score: Option<String>,
    pub team2_score: Option<String>,
    pub team1_overs: Option<String>,
    pub team2_overs: Option<String>,
    pub current_batting: Option<BattingSide>,
    /// Free-text winner label; not checked against the team names.
    pub winner: Option<String>,
    /// Admin who created or last patched this match.
    pub updated_by: UserId,
}
