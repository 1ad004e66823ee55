//! Data structures for the cricket community: users, players, tournaments,
//! teams, matches, messages.

mod game;
mod message;
mod player;
mod team;
mod tournament;
mod user;

pub use game::{BattingSide, Match, MatchId, MatchStatus};
pub use message::{Message, MessageId};
pub use player::{Handedness, Player, PlayerId, PlayerProfile};
pub use team::{PaymentStatus, Team, TeamId, TeamPlayer, TeamWithTournament};
pub use tournament::{Tournament, TournamentId, TournamentStatus};
pub use user::{Role, User, UserId};
