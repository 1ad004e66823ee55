//! Account operations: sign-in, profile completion, phone verification, and
//! admin grants.

use crate::error::AppError;
use crate::logic::auth::current_user;
use crate::models::{Role, User, UserId};
use crate::store::Db;

/// Prefix of assigned unique ids ("BGC001", "BGC002", ...).
const UNIQUE_ID_PREFIX: &str = "BGC";

/// Find the account for `email` or create a fresh one. Models the upstream
/// identity provider's contract that a user record exists after first
/// authentication.
pub fn sign_in(db: &mut Db, name: Option<String>, email: Option<String>) -> User {
    if let Some(email) = email.as_deref() {
        if let Some(user) = db.get_user_by_email(email) {
            return user.clone();
        }
    }
    let user = User::new(name, email);
    db.insert_user(user.clone());
    user
}

/// Complete the signed-in user's profile: store contact details, promote to
/// `Player`, and assign the next sequential unique id. The unique id is
/// assigned once; re-completing the profile keeps the existing id.
pub fn complete_profile(
    db: &mut Db,
    caller: Option<UserId>,
    full_name: String,
    phone_number: String,
) -> Result<User, AppError> {
    let id = current_user(db, caller)?.id;
    let unique_id = next_unique_id(db);
    let user = db.get_user_mut(id).ok_or(AppError::Unauthenticated)?;
    user.name = Some(full_name.clone());
    user.full_name = Some(full_name);
    user.phone_number = Some(phone_number);
    if user.unique_id.is_none() {
        user.unique_id = Some(unique_id);
    }
    user.role = Role::Player;
    user.is_phone_verified = false;
    Ok(user.clone())
}

/// Mark the caller's phone as verified. Any well-formed six-digit OTP is
/// accepted; delivery and checking against a real code happen outside this
/// service.
pub fn verify_phone(db: &mut Db, caller: Option<UserId>, otp: &str) -> Result<User, AppError> {
    let id = current_user(db, caller)?.id;
    if otp.len() != 6 || !otp.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidInput("Invalid OTP format".to_string()));
    }
    let user = db.get_user_mut(id).ok_or(AppError::Unauthenticated)?;
    user.is_phone_verified = true;
    Ok(user.clone())
}

/// Promote a user to admin. Guarded by the configured admin password rather
/// than a caller role, so the first admin can be created on a fresh store.
pub fn make_admin(
    db: &mut Db,
    user_id: UserId,
    admin_password: &str,
    expected_password: &str,
) -> Result<User, AppError> {
    if admin_password != expected_password {
        return Err(AppError::Forbidden);
    }
    let user = db.get_user_mut(user_id).ok_or(AppError::NotFound)?;
    user.role = Role::Admin;
    Ok(user.clone())
}

/// Next unassigned unique id: highest existing numeric suffix plus one,
/// zero-padded to three digits. Grows past three digits naturally.
fn next_unique_id(db: &Db) -> String {
    format_unique_id(db.max_unique_id_suffix(UNIQUE_ID_PREFIX) + 1)
}

fn format_unique_id(n: u32) -> String {
    format!("{UNIQUE_ID_PREFIX}{n:03}")
}
