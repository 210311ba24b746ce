use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::{colors, styles};
use crate::app::types::UserProfile;
use crate::app::views::loading_placeholder;

/// Doctor dashboard. Reachable only through the guard with an
/// authenticated doctor session.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(profile) = state.session.profile().cloned() else {
        loading_placeholder(ui);
        return;
    };

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.set_max_width(960.0);

            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                ui.colored_label(
                    colors::TEXT_HEADING,
                    egui::RichText::new("Doctor Dashboard").size(24.0).strong(),
                );
                ui.add_space(16.0);

                ui.columns(3, |columns| {
                    profile_card(&mut columns[0], &profile);
                    empty_panel(
                        &mut columns[1],
                        "Today's Schedule",
                        "No appointments scheduled for today.",
                        "Set availability",
                    );
                    empty_panel(
                        &mut columns[2],
                        "Patient List",
                        "No patients assigned yet.",
                        "Invite a patient",
                    );
                });
                ui.add_space(16.0);

                styles::card_frame().show(ui, |ui| {
                    ui.colored_label(
                        colors::TEXT_HEADING,
                        egui::RichText::new("Recent Medical Records")
                            .size(16.0)
                            .strong(),
                    );
                    ui.add_space(10.0);
                    styles::inset_frame().show(ui, |ui| {
                        ui.colored_label(
                            colors::TEXT_SECONDARY,
                            "Records shared by your patients will appear here.",
                        );
                    });
                });
            });
        });
    });
}

fn profile_card(ui: &mut egui::Ui, profile: &UserProfile) {
    styles::card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            egui::Frame::new()
                .fill(colors::EMERALD_TINT)
                .corner_radius(egui::CornerRadius::same(20))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.colored_label(
                        colors::EMERALD_TEXT,
                        egui::RichText::new(profile.initial().to_string())
                            .size(18.0)
                            .strong(),
                    );
                });
            ui.vertical(|ui| {
                ui.colored_label(
                    colors::TEXT_HEADING,
                    egui::RichText::new(profile.full_name()).size(17.0).strong(),
                );
                ui.colored_label(colors::TEXT_SECONDARY, &profile.email);
            });
        });
        ui.add_space(12.0);

        detail_row(ui, "Username", &profile.username);
        detail_row(ui, "Practice address", &profile.address.to_string());
    });
}

fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.colored_label(
        colors::TEXT_SECONDARY,
        egui::RichText::new(label).size(12.0).strong(),
    );
    ui.colored_label(colors::TEXT_PRIMARY, value);
    ui.add_space(6.0);
}

fn empty_panel(ui: &mut egui::Ui, title: &str, message: &str, action: &str) {
    styles::card_frame().show(ui, |ui| {
        ui.colored_label(
            colors::TEXT_HEADING,
            egui::RichText::new(title).size(16.0).strong(),
        );
        ui.add_space(10.0);
        styles::inset_frame().show(ui, |ui| {
            ui.colored_label(colors::TEXT_SECONDARY, message);
            ui.add_space(4.0);
            ui.colored_label(
                colors::EMERALD_DARK,
                egui::RichText::new(action).strong(),
            );
        });
    });
}
