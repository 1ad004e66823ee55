//! Tournament operations: creation, listings, and the status lifecycle.

use crate::error::AppError;
use crate::logic::auth::{current_user, require_role};
use crate::models::{Role, Tournament, TournamentId, TournamentStatus, UserId};
use crate::store::Db;
use serde::Deserialize;
use uuid::Uuid;

/// Fields supplied when creating a tournament.
#[derive(Clone, Debug, Deserialize)]
pub struct NewTournament {
    pub name: String,
    pub description: Option<String>,
    pub max_teams: u32,
    pub entry_fee_per_person: u32,
    pub rewards: String,
    #[serde(default)]
    pub ground_photos: Vec<String>,
    #[serde(default)]
    pub trophy_photos: Vec<String>,
    pub date: String,
    pub location: String,
    pub map_link: Option<String>,
    pub overs_per_match: u32,
    pub upi_id: String,
    pub registration_deadline: String,
}

/// Create a tournament (admin only). New tournaments start `Upcoming`.
pub fn create_tournament(
    db: &mut Db,
    caller: Option<UserId>,
    details: NewTournament,
) -> Result<TournamentId, AppError> {
    let user = current_user(db, caller)?;
    require_role(&user, Role::Admin)?;
    let tournament = Tournament {
        id: Uuid::new_v4(),
        name: details.name,
        description: details.description,
        max_teams: details.max_teams,
        entry_fee_per_person: details.entry_fee_per_person,
        rewards: details.rewards,
        ground_photos: details.ground_photos,
        trophy_photos: details.trophy_photos,
        date: details.date,
        location: details.location,
        map_link: details.map_link,
        overs_per_match: details.overs_per_match,
        upi_id: details.upi_id,
        registration_deadline: details.registration_deadline,
        status: TournamentStatus::Upcoming,
        created_by: user.id,
    };
    Ok(db.insert_tournament(tournament))
}

/// Tournaments currently open for registration (the public listing).
pub fn upcoming_tournaments(db: &Db) -> Vec<Tournament> {
    db.tournaments_by_status(TournamentStatus::Upcoming)
}

pub fn tournament_by_id(db: &Db, id: TournamentId) -> Option<Tournament> {
    db.get_tournament(id).cloned()
}

/// Tournaments created by the caller. Non-admins get an empty list rather
/// than an error.
pub fn my_tournaments(db: &Db, caller: Option<UserId>) -> Vec<Tournament> {
    match current_user(db, caller) {
        Ok(user) if user.role == Role::Admin => db.tournaments_by_creator(user.id),
        _ => Vec::new(),
    }
}

/// Set a tournament's status (admin only). Any status may follow any other;
/// existing teams and matches are left untouched, even on `Cancelled`.
pub fn update_tournament_status(
    db: &mut Db,
    caller: Option<UserId>,
    id: TournamentId,
    status: TournamentStatus,
) -> Result<Tournament, AppError> {
    let user = current_user(db, caller)?;
    require_role(&user, Role::Admin)?;
    let tournament = db.get_tournament_mut(id).ok_or(AppError::NotFound)?;
    tournament.status = status;
    Ok(tournament.clone())
}
