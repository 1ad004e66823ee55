//! Player profiles (one per user).

use crate::models::user::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player profile.
pub type PlayerId = Uuid;

/// Batting or bowling hand.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    Left,
    Right,
}

/// Cricket profile attached to a user account. At most one per user;
/// editable by its owner only.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub user_id: UserId,
    /// Photo URL (uploads happen outside this service).
    pub photo: Option<String>,
    pub age: u32,
    /// Area of residence, free text.
    pub area: String,
    pub batting_hand: Handedness,
    pub bowling_hand: Handedness,
    pub additional_info: Option<String>,
    pub is_active: bool,
}

/// A player joined with its owner's display fields (for listings).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    #[serde(flatten)]
    pub player: Player,
    pub user_name: Option<String>,
    pub user_unique_id: Option<String>,
}
