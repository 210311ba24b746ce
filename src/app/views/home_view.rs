use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::{colors, styles};
use crate::app::types::Role;

/// Public landing page: hero copy plus one entry card per role. The
/// join buttons carry the role hint into the signup form.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.colored_label(
                colors::TEXT_HEADING,
                egui::RichText::new("Welcome to MedConnect").size(34.0).strong(),
            );
            ui.add_space(8.0);
            ui.colored_label(
                colors::TEXT_SECONDARY,
                egui::RichText::new("Connecting patients and doctors for better healthcare")
                    .size(17.0),
            );
            ui.add_space(40.0);

            ui.set_max_width(760.0);
            ui.columns(2, |columns| {
                role_card(
                    &mut columns[0],
                    state,
                    Role::Patient,
                    "For Patients",
                    "Create your patient account to access personalized healthcare \
                     services and connect with doctors.",
                    "Join as Patient",
                );
                role_card(
                    &mut columns[1],
                    state,
                    Role::Doctor,
                    "For Doctors",
                    "Register as a doctor to manage your practice, connect with \
                     patients, and provide care efficiently.",
                    "Join as Doctor",
                );
            });
        });
    });
}

fn role_card(
    ui: &mut egui::Ui,
    state: &mut AppState,
    role: Role,
    title: &str,
    blurb: &str,
    action: &str,
) {
    styles::card_frame().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.colored_label(
                styles::role_accent(role),
                egui::RichText::new(match role {
                    Role::Patient => "👤",
                    Role::Doctor => "⚕",
                })
                .size(30.0),
            );
            ui.add_space(8.0);
            ui.colored_label(
                colors::TEXT_HEADING,
                egui::RichText::new(title).size(19.0).strong(),
            );
            ui.add_space(6.0);
            ui.colored_label(colors::TEXT_SECONDARY, blurb);
            ui.add_space(16.0);

            let button = egui::Button::new(
                egui::RichText::new(action).color(colors::TEXT_ON_ACCENT),
            )
            .fill(styles::role_accent(role))
            .min_size(egui::vec2(220.0, 38.0));
            if ui.add(button).clicked() {
                state.open_signup(role);
            }
        });
    });
}
