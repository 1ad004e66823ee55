//! Gully cricket community app: library with models, store, and business logic.

pub mod error;
pub mod logic;
pub mod models;
pub mod store;

pub use error::AppError;
pub use logic::{
    all_messages, all_players, complete_profile, create_match, create_player, create_tournament,
    live_matches, make_admin, mark_message_read, match_by_id, matches_by_tournament, my_player,
    my_teams, my_tournaments, register_team, respond_to_message, send_message, sign_in,
    teams_by_tournament, tournament_by_id, unread_count, update_match_score, update_payment_status,
    update_player, update_tournament_status, upcoming_tournaments, verify_phone, NewTournament,
    PlayerDetails, ScoreUpdate,
};
pub use models::{
    BattingSide, Handedness, Match, MatchId, MatchStatus, Message, MessageId, PaymentStatus,
    Player, PlayerId, PlayerProfile, Role, Team, TeamId, TeamPlayer, TeamWithTournament,
    Tournament, TournamentId, TournamentStatus, User, UserId,
};
pub use store::Db;
