//! User accounts and roles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user account.
pub type UserId = Uuid;

/// Access level of an account. Everyone starts as `User`; completing the
/// player profile promotes to `Player`; `Admin` is granted explicitly.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Player,
    Admin,
}

/// An account created on first sign-in. Accounts are never deleted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    /// Stable human-readable id ("BGC001"), assigned once on profile completion.
    pub unique_id: Option<String>,
    pub is_phone_verified: bool,
}

impl User {
    /// Fresh account with no profile data and the default role.
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            role: Role::User,
            full_name: None,
            phone_number: None,
            unique_id: None,
            is_phone_verified: false,
        }
    }
}
