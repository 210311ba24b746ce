//! Theme Styling Functions
//!
//! Helpers that apply the clinical light palette consistently across
//! the views.

use eframe::egui::{self, Color32, CornerRadius, Stroke};

use super::colors;
use crate::app::types::Role;

/// Apply the global theme to the egui context.
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::PAGE_BG;

    style.visuals.widgets.noninteractive.bg_fill = colors::CARD_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = colors::CARD_BG;
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors::INPUT_BORDER);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.hovered.bg_fill = colors::INSET_BG;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_HEADING);

    style.visuals.widgets.active.bg_fill = colors::SKY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_ON_ACCENT);

    style.visuals.selection.bg_fill = colors::SKY_TINT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::SKY_TEXT);

    style.visuals.extreme_bg_color = colors::CARD_BG;

    ctx.set_style(style);
}

/// Accent color for a role: sky for patients, emerald for doctors.
pub fn role_accent(role: Role) -> Color32 {
    match role {
        Role::Patient => colors::SKY,
        Role::Doctor => colors::EMERALD,
    }
}

/// Tint used behind a selected role toggle.
pub fn role_tint(role: Role) -> Color32 {
    match role {
        Role::Patient => colors::SKY_TINT,
        Role::Doctor => colors::EMERALD_TINT,
    }
}

/// Text color on a role tint.
pub fn role_tint_text(role: Role) -> Color32 {
    match role {
        Role::Patient => colors::SKY_TEXT,
        Role::Doctor => colors::EMERALD_TEXT,
    }
}

/// Frame for the top navigation bar.
pub fn header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::HEADER_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .inner_margin(egui::Margin::symmetric(16, 10))
}

/// Frame for a white content card.
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(24))
}

/// Frame for a muted inset (empty states).
pub fn inset_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::INSET_BG)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::same(12))
}

/// Frame for the error banner above a form.
pub fn error_banner_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::ERROR_BG)
        .stroke(Stroke::new(1.0, colors::ERROR_BORDER))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::same(10))
}
