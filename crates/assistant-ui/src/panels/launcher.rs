//! Floating launcher button that opens and closes the chat widget.

use egui::{self, Align2, RichText, Vec2};
use crate::state::UiState;
use crate::theme::*;

/// Render the round launcher in the bottom-right corner.
/// Returns true when it was clicked this frame.
pub fn launcher_button(ctx: &egui::Context, state: &mut UiState) -> bool {
    let icon = if state.is_open { "✕" } else { "💬" };

    let clicked = egui::Area::new(egui::Id::new("assistant_launcher"))
        .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-SCREEN_MARGIN, -SCREEN_MARGIN))
        .show(ctx, |ui| {
            ui.add(
                egui::Button::new(RichText::new(icon).size(24.0).color(BG_DARK))
                    .fill(ACCENT_CYAN)
                    .corner_radius(PILL_ROUNDING)
                    .min_size(Vec2::splat(LAUNCHER_SIZE)),
            )
            .on_hover_text("Open AI Assistant")
            .clicked()
        })
        .inner;

    if clicked {
        state.toggle_open();
    }
    clicked
}
