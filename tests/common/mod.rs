//! Shared fixtures: a store pre-populated with an admin, profiled users,
//! and tournaments.

#![allow(dead_code)]

use gully_cricket_web::{
    complete_profile, create_tournament, make_admin, sign_in, Db, NewTournament, TeamPlayer,
    TournamentId, UserId,
};
use uuid::Uuid;

pub const ADMIN_PASSWORD: &str = "test-admin";

/// Store with one admin user (who also takes the first unique id).
pub fn db_with_admin() -> (Db, UserId) {
    let mut db = Db::new();
    let admin = sign_in(
        &mut db,
        Some("Club Admin".to_string()),
        Some("admin@example.com".to_string()),
    );
    complete_profile(
        &mut db,
        Some(admin.id),
        "Club Admin".to_string(),
        "+91 00000 00000".to_string(),
    )
    .unwrap();
    make_admin(&mut db, admin.id, ADMIN_PASSWORD, ADMIN_PASSWORD).unwrap();
    (db, admin.id)
}

/// Sign in a user and complete their profile (assigning a unique id).
pub fn profiled_user(db: &mut Db, name: &str) -> UserId {
    let user = sign_in(
        db,
        Some(name.to_string()),
        Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
    );
    complete_profile(
        db,
        Some(user.id),
        name.to_string(),
        "+91 99999 99999".to_string(),
    )
    .unwrap();
    user.id
}

/// Create an upcoming tournament with the given capacity.
pub fn tournament(db: &mut Db, admin: UserId, max_teams: u32) -> TournamentId {
    create_tournament(
        db,
        Some(admin),
        NewTournament {
            name: "Monsoon Cup".to_string(),
            description: None,
            max_teams,
            entry_fee_per_person: 200,
            rewards: "Trophies + Medals".to_string(),
            ground_photos: Vec::new(),
            trophy_photos: Vec::new(),
            date: "2026-08-10".to_string(),
            location: "Koramangala".to_string(),
            map_link: None,
            overs_per_match: 8,
            upi_id: "club@upi".to_string(),
            registration_deadline: "2026-08-01".to_string(),
        },
    )
    .unwrap()
}

/// Squad snapshot payload with `n` made-up players.
pub fn squad(n: usize) -> Vec<TeamPlayer> {
    (0..n)
        .map(|i| TeamPlayer {
            player_id: Uuid::new_v4(),
            player_name: format!("Player {i}"),
            player_unique_id: format!("BGC{:03}", 900 + i),
        })
        .collect()
}
