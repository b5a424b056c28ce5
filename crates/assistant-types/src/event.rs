use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Events emitted by the conversation session.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AssistantEvent {
    /// A message was appended to the transcript at `position`
    MessageAppended { position: usize, message: Message },

    /// A user message was accepted and the assistant is composing
    TurnStart { turn_id: u64 },

    /// The assistant reply was appended and input is open again
    TurnEnd { turn_id: u64, response_key: String },
}
