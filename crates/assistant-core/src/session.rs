//! Conversation session: owns the transcript and the turn lifecycle.
//!
//! A turn runs in two steps:
//! 1. `submit` appends the user message and moves to `AwaitingResponse`
//! 2. after the configured delay, `resolve_turn` classifies the utterance,
//!    appends the canned reply and moves back to `Idle`
//!
//! The transcript is append-only and only one turn can be in flight. The
//! delay itself is driven from outside via [`run_pending_turn`], so the
//! session stays synchronous and testable.

use std::cell::RefCell;
use std::rc::Weak;

use assistant_types::{
    config::AssistantConfig,
    event::AssistantEvent,
    message::Message,
};
use crate::classifier::IntentClassifier;
use crate::event_bus::EventBus;
use crate::ports::DelayPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Input is accepted
    Idle,
    /// A user message is waiting for its reply; input is blocked
    AwaitingResponse { turn_id: u64 },
}

/// A submitted turn that still needs its delayed resolution scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub turn_id: u64,
    pub delay_ms: u32,
}

pub struct ConversationSession {
    config: AssistantConfig,
    classifier: IntentClassifier,
    transcript: Vec<Message>,
    state: SessionState,
    event_bus: EventBus,
    turn_counter: u64,
}

impl ConversationSession {
    pub fn new(config: AssistantConfig, event_bus: EventBus) -> Self {
        let classifier = IntentClassifier::new(&config);
        let welcome = Message::assistant(&config.welcome_message);

        Self {
            config,
            classifier,
            transcript: vec![welcome],
            state: SessionState::Idle,
            event_bus,
            turn_counter: 0,
        }
    }

    /// Accept a user message. Returns `None` without touching the transcript
    /// when the text is blank or a reply is still pending.
    pub fn submit(&mut self, text: &str) -> Option<PendingTurn> {
        if text.trim().is_empty() {
            log::debug!("Ignoring blank submission");
            return None;
        }
        if let SessionState::AwaitingResponse { turn_id } = self.state {
            log::debug!("Ignoring submission while turn {} is pending", turn_id);
            return None;
        }

        self.turn_counter += 1;
        let turn_id = self.turn_counter;

        self.append(Message::user(text));
        self.state = SessionState::AwaitingResponse { turn_id };
        self.event_bus.emit(AssistantEvent::TurnStart { turn_id });

        Some(PendingTurn {
            turn_id,
            delay_ms: self.config.response_delay_ms,
        })
    }

    /// Submit one of the suggested prompts by index, exactly as if typed.
    pub fn submit_suggestion(&mut self, index: usize) -> Option<PendingTurn> {
        let prompt = self.suggestions().get(index)?.clone();
        self.submit(&prompt)
    }

    /// Append the assistant reply for `turn_id`. Returns false and does
    /// nothing if that turn is not the one pending.
    pub fn resolve_turn(&mut self, turn_id: u64) -> bool {
        if self.state != (SessionState::AwaitingResponse { turn_id }) {
            log::debug!("Dropping stale resolution for turn {}", turn_id);
            return false;
        }

        let utterance = self
            .transcript
            .iter()
            .rev()
            .find(|m| m.is_user())
            .map(|m| m.content.as_str())
            .unwrap_or("");
        let response_key = self.classifier.classify(utterance).to_string();
        let reply = self.classifier.response_for(&response_key).to_string();
        log::info!("Turn {} resolved as '{}'", turn_id, response_key);

        self.append(Message::assistant(reply));
        self.state = SessionState::Idle;
        self.event_bus.emit(AssistantEvent::TurnEnd { turn_id, response_key });
        true
    }

    /// Suggested prompts, offered only near the start of a conversation.
    pub fn suggestions(&self) -> &[String] {
        if self.transcript.len() <= self.config.suggestion_threshold {
            &self.config.suggested_prompts
        } else {
            &[]
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_awaiting_response(&self) -> bool {
        matches!(self.state, SessionState::AwaitingResponse { .. })
    }

    fn append(&mut self, message: Message) {
        let position = self.transcript.len();
        self.transcript.push(message.clone());
        self.event_bus.emit(AssistantEvent::MessageAppended { position, message });
    }
}

/// Wait out the composing delay, then resolve the turn.
///
/// Holds only a weak handle while sleeping; if the session was dropped in the
/// meantime the resolution does not fire. Must be spawned via
/// `wasm_bindgen_futures::spawn_local` in the browser.
pub async fn run_pending_turn(
    session: Weak<RefCell<ConversationSession>>,
    turn: PendingTurn,
    delay: &dyn DelayPort,
) -> bool {
    delay.sleep(turn.delay_ms).await;

    let Some(session) = session.upgrade() else {
        log::debug!("Session dropped before turn {} resolved", turn.turn_id);
        return false;
    };
    let resolved = session.borrow_mut().resolve_turn(turn.turn_id);
    resolved
}
