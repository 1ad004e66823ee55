//! Tournament and TournamentStatus.

use crate::models::user::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Lifecycle of a tournament. Transitions are admin-only and unrestricted;
/// only `Upcoming` accepts team registrations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

/// A tournament, owned by the admin who created it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub description: Option<String>,
    /// Registration capacity, checked at registration time.
    pub max_teams: u32,
    pub entry_fee_per_person: u32,
    pub rewards: String,
    /// Photo URLs.
    pub ground_photos: Vec<String>,
    pub trophy_photos: Vec<String>,
    /// Scheduled date, free text as entered by the organizer.
    pub date: String,
    pub location: String,
    pub map_link: Option<String>,
    pub overs_per_match: u32,
    /// UPI target for entry-fee payments.
    pub upi_id: String,
    /// Advisory: shown to users, never compared against the clock. Only
    /// `status` gates registration.
    pub registration_deadline: String,
    pub status: TournamentStatus,
    pub created_by: UserId,
}
