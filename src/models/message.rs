//! Messages from users to the admin inbox.

use crate::models::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a message.
pub type MessageId = Uuid;

/// A message sent by a user to the admins. The sender's name and unique id
/// are snapshots taken at send time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub from_user_id: UserId,
    pub from_user_name: String,
    pub from_user_unique_id: String,
    pub subject: String,
    pub content: String,
    pub is_read: bool,
    pub admin_response: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
