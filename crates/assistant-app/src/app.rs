//! Main egui application: hosts the chat widget and drives delayed replies.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, Align2, CentralPanel, RichText, Stroke, Vec2};

use assistant_core::event_bus::EventBus;
use assistant_core::ports::DelayPort;
use assistant_core::session::{run_pending_turn, ConversationSession, PendingTurn};
use assistant_platform::BrowserDelay;
use assistant_types::config::AssistantConfig;
use assistant_ui::panels::{chat, launcher};
use assistant_ui::state::{ChatAction, UiState};
use assistant_ui::theme;

/// The main application state
pub struct AssistantApp {
    ui_state: UiState,
    event_bus: EventBus,
    session: Rc<RefCell<ConversationSession>>,
    delay: Rc<dyn DelayPort>,
    first_frame: bool,
}

impl AssistantApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AssistantConfig) -> Self {
        let event_bus = EventBus::new();
        let session = ConversationSession::new(config, event_bus.clone());
        let ui_state = UiState::new(session.transcript());

        Self {
            ui_state,
            event_bus,
            session: Rc::new(RefCell::new(session)),
            delay: Rc::new(BrowserDelay::new()),
            first_frame: true,
        }
    }
}

impl eframe::App for AssistantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the session
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        // Keep the typing dots moving
        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new("Guruprasad Parashuram Pishe")
                        .color(theme::TEXT_MUTED)
                        .size(28.0),
                );
            });
        });

        launcher::launcher_button(ctx, &mut self.ui_state);

        if !self.ui_state.is_open {
            return;
        }

        let suggestions = self.session.borrow().suggestions().to_vec();
        let widget_offset = Vec2::new(
            -theme::SCREEN_MARGIN,
            -(theme::SCREEN_MARGIN + theme::LAUNCHER_SIZE + 16.0),
        );

        let action = egui::Window::new("AI Portfolio Assistant")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .fixed_size(theme::WIDGET_SIZE)
            .anchor(Align2::RIGHT_BOTTOM, widget_offset)
            .frame(
                egui::Frame::default()
                    .fill(theme::BG_CARD)
                    .stroke(Stroke::new(1.0, theme::GLASS_BORDER))
                    .corner_radius(theme::BUBBLE_ROUNDING),
            )
            .show(ctx, |ui| chat::chat_panel(ui, &mut self.ui_state, &suggestions))
            .and_then(|r| r.inner.flatten());

        if let Some(action) = action {
            self.dispatch(action, ctx);
        }
    }
}

impl AssistantApp {
    /// Apply a chat action to the session and schedule the reply if a turn started
    fn dispatch(&self, action: ChatAction, ctx: &egui::Context) {
        let pending = {
            let mut session = self.session.borrow_mut();
            match action {
                ChatAction::Submit(text) => session.submit(&text),
                ChatAction::Suggestion(index) => session.submit_suggestion(index),
            }
        };

        if let Some(turn) = pending {
            self.schedule_reply(turn, ctx);
        }
        ctx.request_repaint();
    }

    /// Resolve the turn after its delay (async). Only a weak session handle
    /// is held across the timer.
    fn schedule_reply(&self, turn: PendingTurn, ctx: &egui::Context) {
        let session = Rc::downgrade(&self.session);
        let delay = self.delay.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let turn_id = turn.turn_id;
            if !run_pending_turn(session, turn, delay.as_ref()).await {
                log::debug!("Turn {} finished without a reply", turn_id);
            }
            ctx.request_repaint();
        });
    }
}
