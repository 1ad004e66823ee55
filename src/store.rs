//! In-memory entity store: one table per entity plus the secondary lookups
//! the operations rely on.
//!
//! The web layer owns a single `Db` behind a lock and every operation runs
//! against one borrow of it, so a mutating operation's reads and writes form
//! one critical section. In particular the registration capacity check and
//! the team insert cannot interleave with another registration.

use crate::models::{
    Match, MatchId, MatchStatus, Message, MessageId, Player, PlayerId, Team, TeamId, Tournament,
    TournamentId, TournamentStatus, User, UserId,
};
use std::collections::HashMap;

/// All durable tables. Records are only ever inserted or patched in place;
/// nothing is deleted.
#[derive(Debug, Default)]
pub struct Db {
    users: HashMap<UserId, User>,
    players: HashMap<PlayerId, Player>,
    tournaments: HashMap<TournamentId, Tournament>,
    teams: HashMap<TeamId, Team>,
    matches: HashMap<MatchId, Match>,
    messages: HashMap<MessageId, Message>,
}

impl Db {
    pub fn new() -> Self {
        Self::default()
    }

    // Users

    pub fn insert_user(&mut self, user: User) -> UserId {
        let id = user.id;
        self.users.insert(id, user);
        id
    }

    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn get_user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|u| u.email.as_deref() == Some(email))
    }

    /// Highest numeric suffix among assigned unique ids with `prefix`
    /// (0 when none). Ids with a non-numeric suffix are ignored.
    pub fn max_unique_id_suffix(&self, prefix: &str) -> u32 {
        self.users
            .values()
            .filter_map(|u| u.unique_id.as_deref())
            .filter_map(|uid| uid.strip_prefix(prefix))
            .filter_map(|n| n.parse().ok())
            .max()
            .unwrap_or(0)
    }

    // Players

    pub fn insert_player(&mut self, player: Player) -> PlayerId {
        let id = player.id;
        self.players.insert(id, player);
        id
    }

    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    pub fn get_player_by_user(&self, user_id: UserId) -> Option<&Player> {
        self.players.values().find(|p| p.user_id == user_id)
    }

    pub fn active_players(&self) -> Vec<&Player> {
        self.players.values().filter(|p| p.is_active).collect()
    }

    // Tournaments

    pub fn insert_tournament(&mut self, tournament: Tournament) -> TournamentId {
        let id = tournament.id;
        self.tournaments.insert(id, tournament);
        id
    }

    pub fn get_tournament(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.get(&id)
    }

    pub fn get_tournament_mut(&mut self, id: TournamentId) -> Option<&mut Tournament> {
        self.tournaments.get_mut(&id)
    }

    pub fn tournaments_by_status(&self, status: TournamentStatus) -> Vec<Tournament> {
        self.tournaments
            .values()
            .filter(|t| t.status == status)
            .cloned()
            .collect()
    }

    pub fn tournaments_by_creator(&self, user_id: UserId) -> Vec<Tournament> {
        self.tournaments
            .values()
            .filter(|t| t.created_by == user_id)
            .cloned()
            .collect()
    }

    // Teams

    pub fn insert_team(&mut self, team: Team) -> TeamId {
        let id = team.id;
        self.teams.insert(id, team);
        id
    }

    pub fn get_team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    pub fn get_team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.get_mut(&id)
    }

    pub fn get_team_by_tournament_and_owner(
        &self,
        tournament_id: TournamentId,
        owner_id: UserId,
    ) -> Option<&Team> {
        self.teams
            .values()
            .find(|t| t.tournament_id == tournament_id && t.owner_id == owner_id)
    }

    /// Teams registered for a tournament, oldest registration first.
    pub fn teams_by_tournament(&self, tournament_id: TournamentId) -> Vec<Team> {
        let mut teams: Vec<Team> = self
            .teams
            .values()
            .filter(|t| t.tournament_id == tournament_id)
            .cloned()
            .collect();
        teams.sort_by_key(|t| t.registration_date);
        teams
    }

    /// Teams owned by a user, oldest registration first.
    pub fn teams_by_owner(&self, owner_id: UserId) -> Vec<Team> {
        let mut teams: Vec<Team> = self
            .teams
            .values()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect();
        teams.sort_by_key(|t| t.registration_date);
        teams
    }

    pub fn team_count(&self, tournament_id: TournamentId) -> usize {
        self.teams
            .values()
            .filter(|t| t.tournament_id == tournament_id)
            .count()
    }

    // Matches

    pub fn insert_match(&mut self, m: Match) -> MatchId {
        let id = m.id;
        self.matches.insert(id, m);
        id
    }

    pub fn get_match(&self, id: MatchId) -> Option<&Match> {
        self.matches.get(&id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.get_mut(&id)
    }

    pub fn matches_by_tournament(&self, tournament_id: TournamentId) -> Vec<Match> {
        self.matches
            .values()
            .filter(|m| m.tournament_id == tournament_id)
            .cloned()
            .collect()
    }

    pub fn matches_by_status(&self, status: MatchStatus) -> Vec<Match> {
        self.matches
            .values()
            .filter(|m| m.status == status)
            .cloned()
            .collect()
    }

    // Messages

    pub fn insert_message(&mut self, message: Message) -> MessageId {
        let id = message.id;
        self.messages.insert(id, message);
        id
    }

    pub fn get_message(&self, id: MessageId) -> Option<&Message> {
        self.messages.get(&id)
    }

    pub fn get_message_mut(&mut self, id: MessageId) -> Option<&mut Message> {
        self.messages.get_mut(&id)
    }

    /// The whole inbox, newest first.
    pub fn messages_newest_first(&self) -> Vec<Message> {
        let mut messages: Vec<Message> = self.messages.values().cloned().collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        messages
    }

    pub fn unread_message_count(&self) -> usize {
        self.messages.values().filter(|m| !m.is_read).count()
    }
}
