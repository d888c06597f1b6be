use anyhow::Result;

use crate::chat::channel::Channel;
use crate::openai::{Message, Role, completion};

pub const THINKING_INDICATOR: &str = "Thinking...";
pub const ERROR_PREFIX: &str = "Error: ";

/// In-memory transcript for the active session. Append-only for the
/// session's lifetime; always starts empty. The full contents are
/// resent to the completion API on every turn.
#[derive(Debug, Default)]
pub struct SessionStore {
    messages: Vec<Message>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, msg: Message) {
        self.messages.push(msg);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Runs one turn of the chat: acknowledge the user immediately, append
/// their message, fetch the next completion for the full history, and
/// replace the acknowledgement with the reply.
///
/// A failed completion is contained here: the placeholder is replaced
/// with the error's description and no assistant record is appended, so
/// the history reflects only successful turns plus unanswered user
/// turns. Only channel I/O errors propagate.
pub async fn handle_turn(
    channel: &mut dyn Channel,
    store: &mut SessionStore,
    content: &str,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<()> {
    // Acknowledge before the network call so the user sees feedback
    // bounded by local dispatch, not completion latency
    let placeholder = channel.send(THINKING_INDICATOR)?;

    store.append(Message::new(Role::User, content));

    match completion(store.messages(), api_hostname, api_key, model).await {
        Ok(reply) => {
            channel.update(placeholder, &reply)?;
            store.append(Message::new(Role::Assistant, &reply));
            tracing::info!("User: {}", content);
            tracing::info!("Assistant: {}", reply);
        }
        Err(e) => {
            channel.update(placeholder, &format!("{}{}", ERROR_PREFIX, e))?;
            tracing::error!("Completion failed for user message {:?}: {}", content, e);
        }
    }

    Ok(())
}
