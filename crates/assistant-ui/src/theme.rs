//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_DARK: Color32 = Color32::from_rgb(10, 10, 15);
pub const BG_CARD: Color32 = Color32::from_rgb(22, 22, 32);
pub const BG_SURFACE: Color32 = Color32::from_rgb(38, 38, 52);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(170, 170, 190);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 140);
pub const ACCENT_CYAN: Color32 = Color32::from_rgb(0, 212, 255);
pub const ACCENT_PURPLE: Color32 = Color32::from_rgb(168, 85, 247);
pub const GLASS_BORDER: Color32 = Color32::from_rgb(48, 48, 66);

pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const PILL_ROUNDING: CornerRadius = CornerRadius::same(50);
pub const PANEL_PADDING: Vec2 = Vec2::new(16.0, 12.0);

pub const WIDGET_SIZE: Vec2 = Vec2::new(380.0, 500.0);
pub const LAUNCHER_SIZE: f32 = 60.0;
pub const SCREEN_MARGIN: f32 = 32.0;

/// Apply the dark portfolio theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_DARK;
    style.visuals.window_fill = BG_CARD;
    style.visuals.window_stroke = Stroke::new(1.0, GLASS_BORDER);
    style.visuals.extreme_bg_color = BG_DARK;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_MUTED);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, ACCENT_CYAN);
    style.visuals.widgets.active.bg_fill = ACCENT_CYAN;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, BG_DARK);

    style.visuals.selection.bg_fill = ACCENT_CYAN.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT_CYAN);

    style.spacing.item_spacing = Vec2::new(8.0, 12.0);

    ctx.set_style(style);
}
