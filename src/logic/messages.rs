//! Admin inbox: user messages and admin responses.

use crate::error::AppError;
use crate::logic::auth::{current_user, identified_user, require_role};
use crate::models::{Message, MessageId, Role, UserId};
use crate::store::Db;
use chrono::Utc;
use uuid::Uuid;

/// Send a message to the admins. The sender's display name and unique id
/// are snapshotted onto the message.
pub fn send_message(
    db: &mut Db,
    caller: Option<UserId>,
    subject: String,
    content: String,
) -> Result<MessageId, AppError> {
    let (user, unique_id) = identified_user(db, caller)?;
    let message = Message {
        id: Uuid::new_v4(),
        from_user_id: user.id,
        from_user_name: user.name.unwrap_or_else(|| "Unknown User".to_string()),
        from_user_unique_id: unique_id,
        subject,
        content,
        is_read: false,
        admin_response: None,
        responded_at: None,
        created_at: Utc::now(),
    };
    Ok(db.insert_message(message))
}

/// The whole inbox, newest first (admin only).
pub fn all_messages(db: &Db, caller: Option<UserId>) -> Result<Vec<Message>, AppError> {
    let user = current_user(db, caller)?;
    require_role(&user, Role::Admin)?;
    Ok(db.messages_newest_first())
}

/// Mark a message read (admin only). Marking an already-read message is a
/// no-op success, not an error.
pub fn mark_message_read(
    db: &mut Db,
    caller: Option<UserId>,
    message_id: MessageId,
) -> Result<Message, AppError> {
    let user = current_user(db, caller)?;
    require_role(&user, Role::Admin)?;
    let message = db.get_message_mut(message_id).ok_or(AppError::NotFound)?;
    message.is_read = true;
    Ok(message.clone())
}

/// Respond to a message (admin only): store the response, stamp the time,
/// and force the message read.
pub fn respond_to_message(
    db: &mut Db,
    caller: Option<UserId>,
    message_id: MessageId,
    response: String,
) -> Result<Message, AppError> {
    let user = current_user(db, caller)?;
    require_role(&user, Role::Admin)?;
    let message = db.get_message_mut(message_id).ok_or(AppError::NotFound)?;
    message.admin_response = Some(response);
    message.responded_at = Some(Utc::now());
    message.is_read = true;
    Ok(message.clone())
}

/// Unread messages in the inbox. Non-admins see 0 rather than an error.
pub fn unread_count(db: &Db, caller: Option<UserId>) -> usize {
    match current_user(db, caller) {
        Ok(user) if user.role == Role::Admin => db.unread_message_count(),
        _ => 0,
    }
}
