//! Authorization for Telegram command handling.

use tracing::warn;

use crate::domain::ChatId;

use super::command::parse_command;
use super::control::TelegramControl;

/// Process a message and return the reply, if any.
///
/// Returns `None` for messages from chats outside a non-empty allow-list.
/// Everything else gets a reply: the command's result, its usage line, or
/// the unknown-command hint.
pub async fn command_response_for_message(
    text: &str,
    incoming_chat: ChatId,
    allowed_chats: &[ChatId],
    control: &TelegramControl,
) -> Option<String> {
    if !is_authorized_chat(incoming_chat, allowed_chats) {
        return None;
    }

    match parse_command(text) {
        Ok(command) => Some(control.execute(incoming_chat, command).await),
        Err(err) => Some(err.to_string()),
    }
}

/// Check if a chat may send commands. An empty allow-list admits every chat.
fn is_authorized_chat(incoming_chat: ChatId, allowed_chats: &[ChatId]) -> bool {
    if allowed_chats.is_empty() || allowed_chats.contains(&incoming_chat) {
        return true;
    }

    warn!(
        chat_id = incoming_chat.0,
        "Ignoring Telegram message from unauthorized chat"
    );
    false
}
