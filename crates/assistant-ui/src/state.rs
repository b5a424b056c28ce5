//! UI-level state that drives rendering.
//! A read-only projection of the conversation session, updated each frame
//! by draining the EventBus.

use assistant_types::event::AssistantEvent;
use assistant_types::message::Message;

const STATUS_READY: &str = "Ask me anything about Guruprasad";
const STATUS_TYPING: &str = "Typing...";

/// State visible to UI panels
pub struct UiState {
    /// Transcript snapshot, in conversation order
    pub messages: Vec<Message>,
    /// The assistant is "composing"; input is disabled and dots are shown
    pub is_composing: bool,
    /// Input field content
    pub input_text: String,
    /// Whether the chat widget is expanded
    pub is_open: bool,
    /// Set when a message lands; consumed by the chat panel
    pub scroll_to_latest: bool,
    /// Header subtitle
    pub status_text: String,
}

/// What the user asked for this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    Submit(String),
    Suggestion(usize),
}

impl UiState {
    pub fn new(transcript: &[Message]) -> Self {
        Self {
            messages: transcript.to_vec(),
            is_composing: false,
            input_text: String::new(),
            is_open: false,
            scroll_to_latest: false,
            status_text: STATUS_READY.to_string(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<AssistantEvent>) {
        for event in events {
            match event {
                AssistantEvent::MessageAppended { position, message } => {
                    if position != self.messages.len() {
                        log::warn!(
                            "Out-of-order append at {} (snapshot has {}), skipping",
                            position,
                            self.messages.len()
                        );
                        continue;
                    }
                    self.messages.push(message);
                    self.scroll_to_latest = true;
                }
                AssistantEvent::TurnStart { .. } => {
                    self.is_composing = true;
                    self.status_text = STATUS_TYPING.to_string();
                }
                AssistantEvent::TurnEnd { .. } => {
                    self.is_composing = false;
                    self.status_text = STATUS_READY.to_string();
                }
            }
        }
    }

    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
        log::debug!("Chat widget {}", if self.is_open { "opened" } else { "closed" });
        if self.is_open {
            self.scroll_to_latest = true;
        }
    }

    /// Send is allowed only with non-blank input and no reply pending
    pub fn can_send(&self) -> bool {
        !self.input_text.trim().is_empty() && !self.is_composing
    }

    /// Take the input as typed (untrimmed) if it can be sent
    pub fn take_input(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        Some(std::mem::take(&mut self.input_text))
    }

    pub fn is_busy(&self) -> bool {
        self.is_composing
    }
}
