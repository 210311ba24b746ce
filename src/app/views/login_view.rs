use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::{colors, styles};
use crate::app::views::{form_field, role_toggle};

/// Login form. Validation only demands both fields; the guard and the
/// session take over once the simulated credential check completes.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.set_max_width(420.0);

            styles::card_frame().show(ui, |ui| {
                ui.colored_label(
                    colors::TEXT_HEADING,
                    egui::RichText::new("Login to your account")
                        .size(22.0)
                        .strong(),
                );
                ui.add_space(14.0);

                if let Some(error) = state.login_form.error.clone() {
                    styles::error_banner_frame().show(ui, |ui| {
                        ui.colored_label(colors::ERROR_TEXT, error);
                    });
                    ui.add_space(10.0);
                }

                ui.label(
                    egui::RichText::new("I am a:")
                        .size(13.0)
                        .color(colors::TEXT_SECONDARY),
                );
                ui.add_space(4.0);
                role_toggle(ui, &mut state.login_form.role);

                form_field(ui, "Email", &mut state.login_form.email, false, None);
                form_field(ui, "Password", &mut state.login_form.password, true, None);

                ui.horizontal(|ui| {
                    ui.checkbox(&mut state.login_form.remember_me, "Remember me");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.colored_label(colors::SKY_DARK, "Forgot password?");
                    });
                });
                ui.add_space(16.0);

                let accent = styles::role_accent(state.login_form.role);
                let submit = egui::Button::new(
                    egui::RichText::new("Sign in").color(colors::TEXT_ON_ACCENT),
                )
                .fill(accent)
                .min_size(egui::vec2(ui.available_width(), 38.0));
                if ui
                    .add_enabled(!state.login_form.submitting, submit)
                    .clicked()
                {
                    state.handle_login();
                }

                if state.login_form.submitting {
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.colored_label(colors::TEXT_MUTED, "Signing in...");
                    });
                }

                ui.add_space(14.0);
                ui.horizontal(|ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, "Don't have an account?");
                    if ui.link("Sign up").clicked() {
                        let role = state.login_form.role;
                        state.open_signup(role);
                    }
                });
            });
        });
    });
}
