//! Business operations over the store: accounts, profiles, tournaments,
//! team registration, match scoring, and the admin inbox.

pub mod auth;
mod matches;
mod messages;
mod players;
mod teams;
mod tournaments;
mod users;

pub use matches::{
    create_match, live_matches, match_by_id, matches_by_tournament, update_match_score, ScoreUpdate,
};
pub use messages::{
    all_messages, mark_message_read, respond_to_message, send_message, unread_count,
};
pub use players::{all_players, create_player, my_player, update_player, PlayerDetails};
pub use teams::{my_teams, register_team, teams_by_tournament, update_payment_status};
pub use tournaments::{
    create_tournament, my_tournaments, tournament_by_id, update_tournament_status,
    upcoming_tournaments, NewTournament,
};
pub use users::{complete_profile, make_admin, sign_in, verify_phone};
