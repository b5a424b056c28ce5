//! Chat panel: header, transcript, typing indicator, suggested prompts and input.

use chrono::Local;
use egui::{self, Align, Layout, RichText, ScrollArea, Sense, Vec2};
use assistant_types::message::{Message, Sender};
use crate::state::{ChatAction, UiState};
use crate::theme::*;

/// Render the chat widget body. Returns the user's action for this frame, if any.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState, suggestions: &[String]) -> Option<ChatAction> {
    let mut action = None;

    ui.vertical(|ui| {
        // Header
        egui::Frame::default()
            .fill(ACCENT_PURPLE)
            .inner_margin(PANEL_PADDING)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🤖").size(20.0));
                    ui.vertical(|ui| {
                        ui.label(RichText::new("AI Portfolio Assistant").color(BG_DARK).strong());
                        ui.label(RichText::new(&state.status_text).color(BG_DARK).small());
                    });
                });
            });

        // Messages area
        let reserved = if suggestions.is_empty() { 64.0 } else { 110.0 };
        let available_height = (ui.available_height() - reserved).max(80.0);
        ScrollArea::vertical()
            .max_height(available_height)
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.add_space(8.0);
                for message in &state.messages {
                    render_message(ui, message);
                }

                if state.is_composing {
                    typing_indicator(ui);
                }

                if state.scroll_to_latest {
                    ui.scroll_to_cursor(Some(Align::BOTTOM));
                    state.scroll_to_latest = false;
                }
            });

        // Quick questions
        if !suggestions.is_empty() {
            ui.horizontal_wrapped(|ui| {
                for (index, prompt) in suggestions.iter().enumerate() {
                    let button = egui::Button::new(RichText::new(prompt).color(TEXT_MUTED).small())
                        .fill(BG_CARD)
                        .stroke(egui::Stroke::new(1.0, GLASS_BORDER))
                        .corner_radius(PILL_ROUNDING);
                    if ui.add(button).clicked() {
                        action = Some(ChatAction::Suggestion(index));
                    }
                }
            });
        }

        ui.separator();

        // Input area
        ui.horizontal(|ui| {
            let input = egui::TextEdit::singleline(&mut state.input_text)
                .hint_text("Ask me anything...")
                .desired_width(ui.available_width() - 56.0)
                .font(egui::FontId::proportional(14.0));

            let response = ui.add(input);

            let send_enabled = state.can_send();
            let send_btn = ui.add_enabled(
                send_enabled,
                egui::Button::new(RichText::new("➤").color(BG_DARK))
                    .fill(if send_enabled { ACCENT_CYAN } else { BG_SURFACE })
                    .corner_radius(BUBBLE_ROUNDING)
                    .min_size(Vec2::new(44.0, 0.0)),
            );

            // Submit on Enter or button click
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if enter || send_btn.clicked() {
                if let Some(text) = state.take_input() {
                    action = Some(ChatAction::Submit(text));
                }
                response.request_focus();
            }
        });
    });

    action
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (layout, fill, text_color) = match message.sender {
        Sender::User => (Layout::right_to_left(Align::Min), ACCENT_CYAN, BG_DARK),
        Sender::Assistant => (Layout::left_to_right(Align::Min), BG_DARK, TEXT_SECONDARY),
    };
    let max_width = ui.available_width() * 0.85;

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(fill)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(Vec2::new(14.0, 10.0))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.label(RichText::new(&message.content).color(text_color));
            })
            .response
            .on_hover_text(hover_text(message));
    });
}

/// Sender and send time, in the viewer's local timezone
pub(crate) fn hover_text(message: &Message) -> String {
    format!(
        "{} · {}",
        message.sender.label(),
        message.timestamp.with_timezone(&Local).format("%H:%M")
    )
}

/// Three bouncing dots while the assistant is composing
fn typing_indicator(ui: &mut egui::Ui) {
    let time = ui.input(|i| i.time);

    ui.with_layout(Layout::left_to_right(Align::Min), |ui| {
        egui::Frame::default()
            .fill(BG_DARK)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(Vec2::new(14.0, 10.0))
            .show(ui, |ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(36.0, 14.0), Sense::hover());
                for i in 0..3 {
                    // 0.6s bounce, each dot 0.1s behind the previous
                    let phase = ((time - i as f64 * 0.1) / 0.6).rem_euclid(1.0) as f32;
                    let lift = (phase * std::f32::consts::PI).sin() * 5.0;
                    let center = egui::pos2(rect.left() + 6.0 + i as f32 * 12.0, rect.bottom() - 4.0 - lift);
                    ui.painter().circle_filled(center, 4.0, ACCENT_CYAN);
                }
            });
    });
}
