//! Match scheduling and the score-update state machine.

use crate::error::AppError;
use crate::logic::auth::{current_user, require_role};
use crate::models::{
    BattingSide, Match, MatchId, MatchStatus, Role, TeamId, TournamentId, TournamentStatus, UserId,
};
use crate::store::Db;
use serde::Deserialize;
use uuid::Uuid;

/// Partial score patch: only the supplied fields are applied.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ScoreUpdate {
    pub team1_score: Option<String>,
    pub team2_score: Option<String>,
    pub team1_overs: Option<String>,
    pub team2_overs: Option<String>,
    pub current_batting: Option<BattingSide>,
    pub status: Option<MatchStatus>,
    pub winner: Option<String>,
}

/// Schedule a match between two registered teams (admin only).
///
/// The tournament must exist and not be completed or cancelled. Team names
/// are resolved here and denormalized onto the match; renaming a team later
/// does not update existing matches.
pub fn create_match(
    db: &mut Db,
    caller: Option<UserId>,
    tournament_id: TournamentId,
    team1_id: TeamId,
    team2_id: TeamId,
    match_date: String,
) -> Result<MatchId, AppError> {
    let user = current_user(db, caller)?;
    require_role(&user, Role::Admin)?;

    let tournament = db.get_tournament(tournament_id).ok_or(AppError::NotFound)?;
    if matches!(
        tournament.status,
        TournamentStatus::Completed | TournamentStatus::Cancelled
    ) {
        return Err(AppError::TournamentNotOpen);
    }

    let team1_name = db
        .get_team(team1_id)
        .map(|t| t.name.clone())
        .ok_or(AppError::NotFound)?;
    let team2_name = db
        .get_team(team2_id)
        .map(|t| t.name.clone())
        .ok_or(AppError::NotFound)?;

    let m = Match {
        id: Uuid::new_v4(),
        tournament_id,
        team1_id,
        team2_id,
        team1_name,
        team2_name,
        match_date,
        status: MatchStatus::Upcoming,
        team1_score: None,
        team2_score: None,
        team1_overs: None,
        team2_overs: None,
        current_batting: None,
        winner: None,
        updated_by: user.id,
    };
    Ok(db.insert_match(m))
}

/// Apply a partial score update (admin only). Any subset of fields may be
/// set; the status may move in any direction and the winner label is free
/// text. Nothing is validated beyond the caller's role.
pub fn update_match_score(
    db: &mut Db,
    caller: Option<UserId>,
    match_id: MatchId,
    update: ScoreUpdate,
) -> Result<Match, AppError> {
    let user = current_user(db, caller)?;
    require_role(&user, Role::Admin)?;
    let m = db.get_match_mut(match_id).ok_or(AppError::NotFound)?;
    if let Some(score) = update.team1_score {
        m.team1_score = Some(score);
    }
    if let Some(score) = update.team2_score {
        m.team2_score = Some(score);
    }
    if let Some(overs) = update.team1_overs {
        m.team1_overs = Some(overs);
    }
    if let Some(overs) = update.team2_overs {
        m.team2_overs = Some(overs);
    }
    if let Some(batting) = update.current_batting {
        m.current_batting = Some(batting);
    }
    if let Some(status) = update.status {
        m.status = status;
    }
    if let Some(winner) = update.winner {
        m.winner = Some(winner);
    }
    m.updated_by = user.id;
    Ok(m.clone())
}

/// Matches scheduled in a tournament.
pub fn matches_by_tournament(db: &Db, tournament_id: TournamentId) -> Vec<Match> {
    db.matches_by_tournament(tournament_id)
}

/// Matches currently live (for the live-score board).
pub fn live_matches(db: &Db) -> Vec<Match> {
    db.matches_by_status(MatchStatus::Live)
}

pub fn match_by_id(db: &Db, id: MatchId) -> Option<Match> {
    db.get_match(id).cloned()
}
