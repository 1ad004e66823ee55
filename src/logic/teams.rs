//! Team registration rules and the payment-status lifecycle.

use crate::error::AppError;
use crate::logic::auth::{current_user, identified_user, require_role};
use crate::models::{
    PaymentStatus, Role, Team, TeamId, TeamPlayer, TeamWithTournament, TournamentId,
    TournamentStatus, UserId,
};
use crate::store::Db;
use chrono::Utc;
use uuid::Uuid;

/// Register a team for a tournament.
///
/// Checks run in order, each with its own rejection: the caller must be a
/// user with an assigned unique id; the tournament must exist and be
/// `Upcoming` (the stored registration deadline is advisory and not
/// compared); the owner must not already have a team in this tournament;
/// the tournament must have capacity left. The supplied player list is
/// stored verbatim as a snapshot.
///
/// The checks and the insert run under one store borrow, so two racing
/// registrations cannot both take the last slot.
pub fn register_team(
    db: &mut Db,
    caller: Option<UserId>,
    tournament_id: TournamentId,
    team_name: String,
    players: Vec<TeamPlayer>,
) -> Result<TeamId, AppError> {
    let (user, owner_unique_id) = identified_user(db, caller)?;

    let tournament = db
        .get_tournament(tournament_id)
        .ok_or(AppError::TournamentNotOpen)?;
    if tournament.status != TournamentStatus::Upcoming {
        return Err(AppError::TournamentNotOpen);
    }
    let max_teams = tournament.max_teams;

    if db
        .get_team_by_tournament_and_owner(tournament_id, user.id)
        .is_some()
    {
        return Err(AppError::DuplicateRegistration);
    }

    if db.team_count(tournament_id) >= max_teams as usize {
        return Err(AppError::TournamentFull);
    }

    let team = Team {
        id: Uuid::new_v4(),
        name: team_name,
        owner_id: user.id,
        owner_unique_id,
        players,
        tournament_id,
        registration_date: Utc::now(),
        payment_status: PaymentStatus::Pending,
    };
    let id = db.insert_team(team);
    log::info!("Team {} registered for tournament {}", id, tournament_id);
    Ok(id)
}

/// The caller's teams joined with their tournaments. Unauthenticated
/// callers get an empty list rather than an error.
pub fn my_teams(db: &Db, caller: Option<UserId>) -> Vec<TeamWithTournament> {
    let Ok(user) = current_user(db, caller) else {
        return Vec::new();
    };
    db.teams_by_owner(user.id)
        .into_iter()
        .map(|team| {
            let tournament = db.get_tournament(team.tournament_id).cloned();
            TeamWithTournament { team, tournament }
        })
        .collect()
}

/// All teams registered for a tournament, oldest registration first.
pub fn teams_by_tournament(db: &Db, tournament_id: TournamentId) -> Vec<Team> {
    db.teams_by_tournament(tournament_id)
}

/// Set a team's payment status (admin only). The pending -> paid ->
/// verified order is intent, not enforced: any target value is accepted.
pub fn update_payment_status(
    db: &mut Db,
    caller: Option<UserId>,
    team_id: TeamId,
    status: PaymentStatus,
) -> Result<Team, AppError> {
    let user = current_user(db, caller)?;
    require_role(&user, Role::Admin)?;
    let team = db.get_team_mut(team_id).ok_or(AppError::NotFound)?;
    team.payment_status = status;
    Ok(team.clone())
}
