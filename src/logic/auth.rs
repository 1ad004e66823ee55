//! Caller resolution and role guards shared by every operation.

use crate::error::AppError;
use crate::models::{Role, User, UserId};
use crate::store::Db;

/// Resolve the caller to a stored user. A missing or unknown id is
/// `Unauthenticated`.
pub fn current_user(db: &Db, caller: Option<UserId>) -> Result<User, AppError> {
    caller
        .and_then(|id| db.get_user(id))
        .cloned()
        .ok_or(AppError::Unauthenticated)
}

/// Require the caller to hold `role`. Admins satisfy every requirement;
/// players satisfy player- and user-level requirements.
pub fn require_role(user: &User, role: Role) -> Result<(), AppError> {
    let allowed = match role {
        Role::Admin => user.role == Role::Admin,
        Role::Player => matches!(user.role, Role::Admin | Role::Player),
        Role::User => true,
    };
    if allowed {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Resolve the caller and require an assigned unique id. Operations that
/// snapshot the id onto a record refuse callers who have not completed
/// their profile.
pub fn identified_user(db: &Db, caller: Option<UserId>) -> Result<(User, String), AppError> {
    let user = current_user(db, caller)?;
    let unique_id = user.unique_id.clone().ok_or(AppError::Unauthenticated)?;
    Ok((user, unique_id))
}
