//! Integration tests for team registration: status gating, duplicates,
//! capacity, and the payment lifecycle.

mod common;

use common::{db_with_admin, profiled_user, squad, tournament};
use gully_cricket_web::{
    register_team, sign_in, teams_by_tournament, update_payment_status, update_tournament_status,
    AppError, PaymentStatus, TournamentStatus,
};
use uuid::Uuid;

#[test]
fn registration_starts_pending_with_verbatim_squad() {
    let (mut db, admin) = db_with_admin();
    let owner = profiled_user(&mut db, "Asha");
    let t = tournament(&mut db, admin, 4);

    let team_id = register_team(&mut db, Some(owner), t, "Alpha".to_string(), squad(6)).unwrap();

    let teams = teams_by_tournament(&db, t);
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, team_id);
    assert_eq!(teams[0].payment_status, PaymentStatus::Pending);
    assert_eq!(teams[0].players.len(), 6);
    assert_eq!(teams[0].players[0].player_name, "Player 0");
}

#[test]
fn unauthenticated_or_unprofiled_callers_are_rejected() {
    let (mut db, admin) = db_with_admin();
    let t = tournament(&mut db, admin, 4);

    assert_eq!(
        register_team(&mut db, None, t, "Alpha".to_string(), squad(2)),
        Err(AppError::Unauthenticated)
    );

    // Signed in but never completed the profile: no unique id yet.
    let bare = sign_in(&mut db, Some("Noor".to_string()), Some("noor@example.com".to_string()));
    assert_eq!(
        register_team(&mut db, Some(bare.id), t, "Alpha".to_string(), squad(2)),
        Err(AppError::Unauthenticated)
    );
}

#[test]
fn only_upcoming_tournaments_accept_registrations() {
    let (mut db, admin) = db_with_admin();
    let owner = profiled_user(&mut db, "Asha");

    for status in [
        TournamentStatus::Ongoing,
        TournamentStatus::Completed,
        TournamentStatus::Cancelled,
    ] {
        let t = tournament(&mut db, admin, 4);
        update_tournament_status(&mut db, Some(admin), t, status).unwrap();
        assert_eq!(
            register_team(&mut db, Some(owner), t, "Alpha".to_string(), squad(2)),
            Err(AppError::TournamentNotOpen)
        );
    }

    // Unknown tournament ids get the same rejection.
    assert_eq!(
        register_team(&mut db, Some(owner), Uuid::new_v4(), "Alpha".to_string(), squad(2)),
        Err(AppError::TournamentNotOpen)
    );
}

#[test]
fn one_slot_scenario_duplicate_then_full() {
    let (mut db, admin) = db_with_admin();
    let a = profiled_user(&mut db, "Asha");
    let b = profiled_user(&mut db, "Bala");
    let t = tournament(&mut db, admin, 1);

    register_team(&mut db, Some(a), t, "Alpha".to_string(), squad(2)).unwrap();
    assert_eq!(
        register_team(&mut db, Some(a), t, "Alpha Again".to_string(), squad(2)),
        Err(AppError::DuplicateRegistration)
    );
    assert_eq!(
        register_team(&mut db, Some(b), t, "Beta".to_string(), squad(2)),
        Err(AppError::TournamentFull)
    );
    assert_eq!(teams_by_tournament(&db, t).len(), 1);
}

#[test]
fn duplicate_check_is_per_tournament() {
    let (mut db, admin) = db_with_admin();
    let owner = profiled_user(&mut db, "Asha");
    let t1 = tournament(&mut db, admin, 4);
    let t2 = tournament(&mut db, admin, 4);

    register_team(&mut db, Some(owner), t1, "Alpha".to_string(), squad(2)).unwrap();
    // Same owner, different tournament: allowed.
    register_team(&mut db, Some(owner), t2, "Alpha".to_string(), squad(2)).unwrap();
}

#[test]
fn capacity_is_enforced_sequentially() {
    let (mut db, admin) = db_with_admin();
    let t = tournament(&mut db, admin, 3);

    for i in 0..3 {
        let owner = profiled_user(&mut db, &format!("Owner {i}"));
        register_team(&mut db, Some(owner), t, format!("Team {i}"), squad(2)).unwrap();
    }
    let late = profiled_user(&mut db, "Late Owner");
    assert_eq!(
        register_team(&mut db, Some(late), t, "Late".to_string(), squad(2)),
        Err(AppError::TournamentFull)
    );
    assert_eq!(teams_by_tournament(&db, t).len(), 3);
}

#[test]
fn concurrent_registrations_cannot_exceed_capacity() {
    use std::sync::{Arc, RwLock};
    use std::thread;

    let (mut db, admin) = db_with_admin();
    let owners: Vec<_> = (0..8)
        .map(|i| profiled_user(&mut db, &format!("Racer {i}")))
        .collect();
    let t = tournament(&mut db, admin, 3);
    let db = Arc::new(RwLock::new(db));

    let handles: Vec<_> = owners
        .into_iter()
        .enumerate()
        .map(|(i, owner)| {
            let db = Arc::clone(&db);
            thread::spawn(move || {
                let mut g = db.write().unwrap();
                register_team(&mut g, Some(owner), t, format!("Team {i}"), squad(2))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let successes = results.iter().filter(|r| r.is_ok()).count();
    let full = results
        .iter()
        .filter(|r| **r == Err(AppError::TournamentFull))
        .count();

    assert_eq!(successes, 3);
    assert_eq!(full, 5);
    let g = db.read().unwrap();
    assert_eq!(teams_by_tournament(&g, t).len(), 3);
}

#[test]
fn payment_status_accepts_any_order() {
    let (mut db, admin) = db_with_admin();
    let owner = profiled_user(&mut db, "Asha");
    let t = tournament(&mut db, admin, 4);
    let team_id = register_team(&mut db, Some(owner), t, "Alpha".to_string(), squad(2)).unwrap();

    // Skip straight to verified, then back to pending: both allowed.
    let team = update_payment_status(&mut db, Some(admin), team_id, PaymentStatus::Verified).unwrap();
    assert_eq!(team.payment_status, PaymentStatus::Verified);
    let team = update_payment_status(&mut db, Some(admin), team_id, PaymentStatus::Pending).unwrap();
    assert_eq!(team.payment_status, PaymentStatus::Pending);

    // Only admins may touch payment status.
    assert_eq!(
        update_payment_status(&mut db, Some(owner), team_id, PaymentStatus::Paid),
        Err(AppError::Forbidden)
    );
    assert_eq!(
        update_payment_status(&mut db, Some(admin), Uuid::new_v4(), PaymentStatus::Paid),
        Err(AppError::NotFound)
    );
}

#[test]
fn tournament_status_is_open_for_admins_and_gates_registration() {
    let (mut db, admin) = db_with_admin();
    let owner = profiled_user(&mut db, "Asha");
    let t = tournament(&mut db, admin, 4);

    // Completed back to upcoming is allowed, and reopens registration.
    update_tournament_status(&mut db, Some(admin), t, TournamentStatus::Completed).unwrap();
    update_tournament_status(&mut db, Some(admin), t, TournamentStatus::Upcoming).unwrap();
    register_team(&mut db, Some(owner), t, "Alpha".to_string(), squad(2)).unwrap();

    assert_eq!(
        update_tournament_status(&mut db, Some(owner), t, TournamentStatus::Cancelled),
        Err(AppError::Forbidden)
    );
    assert_eq!(
        update_tournament_status(&mut db, Some(admin), Uuid::new_v4(), TournamentStatus::Ongoing),
        Err(AppError::NotFound)
    );
}

#[test]
fn cancelling_a_tournament_does_not_touch_its_teams() {
    let (mut db, admin) = db_with_admin();
    let owner = profiled_user(&mut db, "Asha");
    let t = tournament(&mut db, admin, 4);
    register_team(&mut db, Some(owner), t, "Alpha".to_string(), squad(2)).unwrap();

    update_tournament_status(&mut db, Some(admin), t, TournamentStatus::Cancelled).unwrap();

    let teams = teams_by_tournament(&db, t);
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].payment_status, PaymentStatus::Pending);
}
