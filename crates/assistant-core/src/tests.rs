#[cfg(test)]
mod tests {
    use crate::classifier::IntentClassifier;
    use crate::event_bus::EventBus;
    use crate::ports::DelayPort;
    use crate::session::*;
    use assistant_types::config::{AssistantConfig, IntentRule};
    use assistant_types::event::AssistantEvent;
    use assistant_types::message::Sender;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new(&AssistantConfig::default())
    }

    fn session() -> (ConversationSession, EventBus) {
        let bus = EventBus::new();
        (ConversationSession::new(AssistantConfig::default(), bus.clone()), bus)
    }

    // ─── EventBus Tests ──────────────────────────────────────

    #[test]
    fn test_event_bus_new_is_empty() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_bus_emit_and_drain() {
        let bus = EventBus::new();
        bus.emit(AssistantEvent::TurnStart { turn_id: 1 });
        bus.emit(AssistantEvent::TurnEnd { turn_id: 1, response_key: "hello".to_string() });

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], AssistantEvent::TurnStart { turn_id: 1 }));
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_bus_clone_shares_state() {
        let bus1 = EventBus::new();
        let bus2 = bus1.clone();

        bus1.emit(AssistantEvent::TurnStart { turn_id: 1 });
        assert_eq!(bus2.drain().len(), 1);
        assert!(bus1.drain().is_empty());
    }

    // ─── Classifier Tests ────────────────────────────────────

    #[test]
    fn test_classify_each_rule() {
        let c = classifier();
        assert_eq!(c.classify("What are your skills?"), "skills");
        assert_eq!(c.classify("Tell me about your projects"), "projects");
        assert_eq!(c.classify("What is your experience?"), "experience");
        assert_eq!(c.classify("Can I download your CV?"), "resume");
        assert_eq!(c.classify("How can I reach you?"), "contact");
        assert_eq!(c.classify("hello"), "hello");
        assert_eq!(c.classify("Good morning"), "default");
    }

    #[test]
    fn test_classify_every_skills_keyword() {
        let c = classifier();
        for text in ["skill", "tech", "stack", "Any SKILLset?", "fintech"] {
            assert_eq!(c.classify(text), "skills", "for {:?}", text);
        }
    }

    #[test]
    fn test_classify_first_match_wins() {
        let c = classifier();
        assert_eq!(
            c.classify("What tech stack did you use to build your resume?"),
            "skills"
        );
        assert_eq!(c.classify("Did you use a tech stack in your projects?"), "skills");
        assert_eq!(c.classify("Download the project files"), "projects");
        assert_eq!(c.classify("Hey, send me your resume"), "resume");
    }

    #[test]
    fn test_classify_plain_substring_match() {
        let c = classifier();
        // "this" contains "hi"; "network" contains "work"
        assert_eq!(c.classify("What is this?"), "hello");
        assert_eq!(c.classify("network"), "projects");
    }

    #[test]
    fn test_classify_empty_and_whitespace() {
        let c = classifier();
        assert_eq!(c.classify(""), "default");
        assert_eq!(c.classify("   "), "default");
    }

    #[test]
    fn test_classify_case_insensitive() {
        let c = classifier();
        assert_eq!(c.classify("SKILLS"), c.classify("skills"));
        assert_eq!(c.classify("HeLLo"), "hello");
    }

    #[test]
    fn test_classify_is_pure() {
        let c = classifier();
        let first = c.classify("Where did you work?").to_string();
        let second = c.classify("Where did you work?").to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_response_for_classified_key() {
        let config = AssistantConfig::default();
        let c = IntentClassifier::new(&config);
        assert_eq!(c.response_for(c.classify("hello")), config.response("hello").unwrap());
        assert_eq!(c.response_for(c.classify("???")), config.response("default").unwrap());
    }

    #[test]
    fn test_response_for_unknown_key_falls_back() {
        let config = AssistantConfig::default();
        let c = IntentClassifier::new(&config);
        assert_eq!(c.response_for("nope"), config.response("default").unwrap());
    }

    #[test]
    fn test_custom_rules_follow_config_order() {
        let mut config = AssistantConfig::default();
        config.rules.insert(0, IntentRule::new("contact", &["resume"]));
        let c = IntentClassifier::new(&config);
        assert_eq!(c.classify("your resume please"), "contact");
        assert_eq!(c.classify("download it"), "resume");
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_starts_with_welcome() {
        let (session, bus) = session();
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].sender, Sender::Assistant);
        assert_eq!(transcript[0].content, AssistantConfig::default().welcome_message);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_submit_then_resolve() {
        let (mut session, _bus) = session();

        let turn = session.submit("hello").unwrap();
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[1].sender, Sender::User);
        assert_eq!(session.state(), SessionState::AwaitingResponse { turn_id: turn.turn_id });
        assert!(session.is_awaiting_response());

        assert!(session.resolve_turn(turn.turn_id));
        assert_eq!(session.transcript().len(), 3);
        let reply = &session.transcript()[2];
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.content, AssistantConfig::default().response("hello").unwrap());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_submit_returns_configured_delay() {
        let mut config = AssistantConfig::default();
        config.response_delay_ms = 40;
        let mut session = ConversationSession::new(config, EventBus::new());
        let turn = session.submit("hi").unwrap();
        assert_eq!(turn.delay_ms, 40);
        assert_eq!(turn.turn_id, 1);
    }

    #[test]
    fn test_submit_keeps_raw_text() {
        let (mut session, _bus) = session();
        session.submit("  tell me about your stack \n").unwrap();
        assert_eq!(session.transcript()[1].content, "  tell me about your stack \n");
    }

    #[test]
    fn test_submit_blank_is_noop() {
        let (mut session, bus) = session();
        assert!(session.submit("").is_none());
        assert!(session.submit("   \n\t").is_none());
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_submit_while_awaiting_is_noop() {
        let (mut session, _bus) = session();
        let turn = session.submit("hello").unwrap();
        assert!(session.submit("skills?").is_none());
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.state(), SessionState::AwaitingResponse { turn_id: turn.turn_id });
    }

    #[test]
    fn test_resolve_uses_latest_user_message() {
        let (mut session, _bus) = session();
        let first = session.submit("hello").unwrap();
        session.resolve_turn(first.turn_id);
        let second = session.submit("What tech stack did you use to build your resume?").unwrap();
        session.resolve_turn(second.turn_id);

        let config = AssistantConfig::default();
        assert_eq!(session.transcript().len(), 5);
        assert_eq!(session.transcript()[4].content, config.response("skills").unwrap());
    }

    #[test]
    fn test_resolve_stale_turn_is_ignored() {
        let (mut session, _bus) = session();
        assert!(!session.resolve_turn(1));

        let turn = session.submit("hello").unwrap();
        assert!(!session.resolve_turn(turn.turn_id + 1));
        assert!(session.resolve_turn(turn.turn_id));
        assert!(!session.resolve_turn(turn.turn_id));
        assert_eq!(session.transcript().len(), 3);
    }

    #[test]
    fn test_transcript_is_append_only() {
        let (mut session, _bus) = session();
        let mut seen = session.transcript().to_vec();

        for text in ["hello", "skills?", "Good morning"] {
            let turn = session.submit(text).unwrap();
            session.resolve_turn(turn.turn_id);
            assert!(!session.resolve_turn(turn.turn_id));

            let transcript = session.transcript();
            assert_eq!(transcript.len(), seen.len() + 2);
            assert_eq!(&transcript[..seen.len()], &seen[..]);
            seen = transcript.to_vec();
        }
        assert_eq!(seen.len(), 7);
        assert_eq!(seen[0].content, AssistantConfig::default().welcome_message);
    }

    #[test]
    fn test_session_events() {
        let (mut session, bus) = session();
        let turn = session.submit("hello").unwrap();

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], AssistantEvent::MessageAppended { position: 1, message } if message.content == "hello"));
        assert!(matches!(events[1], AssistantEvent::TurnStart { turn_id } if turn_id == turn.turn_id));

        session.resolve_turn(turn.turn_id);
        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], AssistantEvent::MessageAppended { position: 2, message } if message.sender == Sender::Assistant));
        assert!(matches!(&events[1], AssistantEvent::TurnEnd { response_key, .. } if response_key == "hello"));
    }

    #[test]
    fn test_appended_positions_track_transcript() {
        let (mut session, bus) = session();
        for text in ["hi", "projects", "contact"] {
            let turn = session.submit(text).unwrap();
            session.resolve_turn(turn.turn_id);
        }

        let positions: Vec<usize> = bus
            .drain()
            .into_iter()
            .filter_map(|event| match event {
                AssistantEvent::MessageAppended { position, .. } => Some(position),
                _ => None,
            })
            .collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(session.transcript().len(), 7);
    }

    // ─── Suggested Prompt Tests ──────────────────────────────

    #[test]
    fn test_suggestions_shown_near_start_only() {
        let (mut session, _bus) = session();
        assert_eq!(session.suggestions().len(), 3);

        let turn = session.submit("hello").unwrap();
        assert_eq!(session.suggestions().len(), 3);

        session.resolve_turn(turn.turn_id);
        assert!(session.suggestions().is_empty());

        let turn = session.submit("skills").unwrap();
        session.resolve_turn(turn.turn_id);
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn test_submit_suggestion_behaves_like_submit() {
        let (mut session, _bus) = session();
        let turn = session.submit_suggestion(0).unwrap();
        assert_eq!(session.transcript()[1].content, "What are your skills?");

        session.resolve_turn(turn.turn_id);
        let config = AssistantConfig::default();
        assert_eq!(session.transcript()[2].content, config.response("skills").unwrap());
    }

    #[test]
    fn test_submit_suggestion_rejected_when_hidden_or_out_of_range() {
        let (mut session, _bus) = session();
        assert!(session.submit_suggestion(9).is_none());

        let turn = session.submit_suggestion(1).unwrap();
        assert!(session.submit_suggestion(2).is_none()); // awaiting
        session.resolve_turn(turn.turn_id);
        assert!(session.submit_suggestion(2).is_none()); // hidden
        assert_eq!(session.transcript().len(), 3);
    }

    // ─── Turn Driver Tests ───────────────────────────────────

    /// Delay that completes immediately and records requested durations
    struct ImmediateDelay {
        requested: RefCell<Vec<u32>>,
    }

    #[async_trait(?Send)]
    impl DelayPort for ImmediateDelay {
        async fn sleep(&self, ms: u32) {
            self.requested.borrow_mut().push(ms);
        }
    }

    /// Delay that drops the last strong session handle while "sleeping"
    struct DroppingDelay {
        held: RefCell<Option<Rc<RefCell<ConversationSession>>>>,
    }

    #[async_trait(?Send)]
    impl DelayPort for DroppingDelay {
        async fn sleep(&self, _ms: u32) {
            self.held.borrow_mut().take();
        }
    }

    #[test]
    fn test_run_pending_turn_resolves_after_delay() {
        let (session, _bus) = session();
        let session = Rc::new(RefCell::new(session));
        let turn = session.borrow_mut().submit("email?").unwrap();
        let delay = ImmediateDelay { requested: RefCell::new(Vec::new()) };

        let resolved = block_on(run_pending_turn(Rc::downgrade(&session), turn, &delay));

        assert!(resolved);
        assert_eq!(*delay.requested.borrow(), vec![1000]);
        let session = session.borrow();
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(
            session.transcript()[2].content,
            AssistantConfig::default().response("contact").unwrap()
        );
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_run_pending_turn_skips_dropped_session() {
        let bus = EventBus::new();
        let session = Rc::new(RefCell::new(ConversationSession::new(
            AssistantConfig::default(),
            bus.clone(),
        )));
        let turn = session.borrow_mut().submit("hello").unwrap();
        let weak = Rc::downgrade(&session);
        let _ = bus.drain();

        let delay = DroppingDelay { held: RefCell::new(Some(session)) };
        let resolved = block_on(run_pending_turn(weak.clone(), turn, &delay));

        assert!(!resolved);
        assert!(weak.upgrade().is_none());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_run_pending_turn_twice_appends_once() {
        let (session, _bus) = session();
        let session = Rc::new(RefCell::new(session));
        let turn = session.borrow_mut().submit("hello").unwrap();
        let delay = ImmediateDelay { requested: RefCell::new(Vec::new()) };

        assert!(block_on(run_pending_turn(Rc::downgrade(&session), turn.clone(), &delay)));
        assert!(!block_on(run_pending_turn(Rc::downgrade(&session), turn, &delay)));
        assert_eq!(session.borrow().transcript().len(), 3);
    }
}
