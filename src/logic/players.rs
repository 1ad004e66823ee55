//! Player profile operations.

use crate::error::AppError;
use crate::logic::auth::current_user;
use crate::models::{Handedness, Player, PlayerId, PlayerProfile, UserId};
use crate::store::Db;
use serde::Deserialize;
use uuid::Uuid;

/// Fields supplied when creating or editing a profile.
#[derive(Clone, Debug, Deserialize)]
pub struct PlayerDetails {
    pub photo: Option<String>,
    pub age: u32,
    pub area: String,
    pub batting_hand: Handedness,
    pub bowling_hand: Handedness,
    pub additional_info: Option<String>,
}

/// Create the caller's player profile. Each user may own at most one.
pub fn create_player(
    db: &mut Db,
    caller: Option<UserId>,
    details: PlayerDetails,
) -> Result<PlayerId, AppError> {
    let user = current_user(db, caller)?;
    if db.get_player_by_user(user.id).is_some() {
        return Err(AppError::ProfileExists);
    }
    let player = Player {
        id: Uuid::new_v4(),
        user_id: user.id,
        photo: details.photo,
        age: details.age,
        area: details.area,
        batting_hand: details.batting_hand,
        bowling_hand: details.bowling_hand,
        additional_info: details.additional_info,
        is_active: true,
    };
    Ok(db.insert_player(player))
}

/// The caller's own profile, if any. Unauthenticated callers get `None`
/// rather than an error.
pub fn my_player(db: &Db, caller: Option<UserId>) -> Option<Player> {
    let user = current_user(db, caller).ok()?;
    db.get_player_by_user(user.id).cloned()
}

/// Active profiles joined with their owner's display fields.
pub fn all_players(db: &Db) -> Vec<PlayerProfile> {
    db.active_players()
        .into_iter()
        .map(|player| {
            let user = db.get_user(player.user_id);
            PlayerProfile {
                player: player.clone(),
                user_name: user.and_then(|u| u.name.clone()),
                user_unique_id: user.and_then(|u| u.unique_id.clone()),
            }
        })
        .collect()
}

/// Edit a profile. Only its owner may edit it; `is_active` is untouched.
pub fn update_player(
    db: &mut Db,
    caller: Option<UserId>,
    player_id: PlayerId,
    details: PlayerDetails,
) -> Result<Player, AppError> {
    let user = current_user(db, caller)?;
    let player = db.get_player_mut(player_id).ok_or(AppError::NotFound)?;
    if player.user_id != user.id {
        return Err(AppError::Forbidden);
    }
    player.photo = details.photo;
    player.age = details.age;
    player.area = details.area;
    player.batting_hand = details.batting_hand;
    player.bowling_hand = details.bowling_hand;
    player.additional_info = details.additional_info;
    Ok(player.clone())
}
