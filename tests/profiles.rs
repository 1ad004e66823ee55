//! Integration tests for accounts and player profiles.

mod common;

use common::{db_with_admin, profiled_user, ADMIN_PASSWORD};
use gully_cricket_web::{
    all_players, complete_profile, create_player, make_admin, my_player, sign_in, update_player,
    verify_phone, AppError, Db, Handedness, PlayerDetails, Role,
};
use uuid::Uuid;

fn details(area: &str) -> PlayerDetails {
    PlayerDetails {
        photo: None,
        age: 24,
        area: area.to_string(),
        batting_hand: Handedness::Right,
        bowling_hand: Handedness::Left,
        additional_info: None,
    }
}

#[test]
fn sign_in_reuses_the_account_for_a_known_email() {
    let mut db = Db::new();
    let first = sign_in(&mut db, Some("Asha".to_string()), Some("asha@example.com".to_string()));
    let second = sign_in(&mut db, None, Some("asha@example.com".to_string()));
    assert_eq!(first.id, second.id);

    let other = sign_in(&mut db, None, Some("bala@example.com".to_string()));
    assert_ne!(first.id, other.id);
}

#[test]
fn unique_ids_are_assigned_sequentially_and_only_once() {
    let mut db = Db::new();
    let a = sign_in(&mut db, Some("Asha".to_string()), Some("asha@example.com".to_string()));
    let b = sign_in(&mut db, Some("Bala".to_string()), Some("bala@example.com".to_string()));

    let a = complete_profile(&mut db, Some(a.id), "Asha".to_string(), "+91 1".to_string()).unwrap();
    assert_eq!(a.unique_id.as_deref(), Some("BGC001"));
    assert_eq!(a.role, Role::Player);

    let b = complete_profile(&mut db, Some(b.id), "Bala".to_string(), "+91 2".to_string()).unwrap();
    assert_eq!(b.unique_id.as_deref(), Some("BGC002"));

    // Re-completing updates contact details but keeps the assigned id.
    let a = complete_profile(&mut db, Some(a.id), "Asha K".to_string(), "+91 3".to_string()).unwrap();
    assert_eq!(a.unique_id.as_deref(), Some("BGC001"));
    assert_eq!(a.full_name.as_deref(), Some("Asha K"));
}

#[test]
fn verify_phone_checks_the_otp_shape() {
    let mut db = Db::new();
    let user = sign_in(&mut db, None, Some("asha@example.com".to_string()));

    for bad in ["12345", "1234567", "12a456", ""] {
        assert!(matches!(
            verify_phone(&mut db, Some(user.id), bad),
            Err(AppError::InvalidInput(_))
        ));
    }
    assert_eq!(verify_phone(&mut db, None, "123456"), Err(AppError::Unauthenticated));

    let user = verify_phone(&mut db, Some(user.id), "123456").unwrap();
    assert!(user.is_phone_verified);
}

#[test]
fn make_admin_requires_the_configured_password() {
    let mut db = Db::new();
    let user = sign_in(&mut db, None, Some("asha@example.com".to_string()));

    assert_eq!(
        make_admin(&mut db, user.id, "wrong", ADMIN_PASSWORD),
        Err(AppError::Forbidden)
    );
    assert_eq!(
        make_admin(&mut db, Uuid::new_v4(), ADMIN_PASSWORD, ADMIN_PASSWORD),
        Err(AppError::NotFound)
    );

    let user = make_admin(&mut db, user.id, ADMIN_PASSWORD, ADMIN_PASSWORD).unwrap();
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn each_user_gets_at_most_one_player_profile() {
    let (mut db, _admin) = db_with_admin();
    let owner = profiled_user(&mut db, "Asha");

    create_player(&mut db, Some(owner), details("Indiranagar")).unwrap();
    assert_eq!(
        create_player(&mut db, Some(owner), details("HSR")),
        Err(AppError::ProfileExists)
    );
    assert_eq!(
        create_player(&mut db, None, details("HSR")),
        Err(AppError::Unauthenticated)
    );
}

#[test]
fn my_player_is_none_until_created() {
    let (mut db, _admin) = db_with_admin();
    let owner = profiled_user(&mut db, "Asha");

    assert!(my_player(&db, Some(owner)).is_none());
    assert!(my_player(&db, None).is_none());

    create_player(&mut db, Some(owner), details("Indiranagar")).unwrap();
    let player = my_player(&db, Some(owner)).unwrap();
    assert_eq!(player.area, "Indiranagar");
    assert!(player.is_active);
}

#[test]
fn listings_join_owner_fields_for_active_players() {
    let (mut db, _admin) = db_with_admin();
    let owner = profiled_user(&mut db, "Asha");
    create_player(&mut db, Some(owner), details("Indiranagar")).unwrap();

    let listed = all_players(&db);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].user_name.as_deref(), Some("Asha"));
    assert_eq!(listed[0].user_unique_id.as_deref(), Some("BGC002"));
}

#[test]
fn profiles_are_editable_by_their_owner_only() {
    let (mut db, _admin) = db_with_admin();
    let owner = profiled_user(&mut db, "Asha");
    let other = profiled_user(&mut db, "Bala");
    let player_id = create_player(&mut db, Some(owner), details("Indiranagar")).unwrap();

    assert_eq!(
        update_player(&mut db, Some(other), player_id, details("HSR")),
        Err(AppError::Forbidden)
    );
    assert_eq!(
        update_player(&mut db, Some(owner), Uuid::new_v4(), details("HSR")),
        Err(AppError::NotFound)
    );

    let player = update_player(&mut db, Some(owner), player_id, details("HSR")).unwrap();
    assert_eq!(player.area, "HSR");
    // Editing never deactivates a profile.
    assert!(player.is_active);
}
