use eframe::egui;

use crate::app::router::Route;
use crate::app::state::AppState;
use crate::app::theme::{colors, styles};
use crate::app::types::Role;

pub mod debug_view;
pub mod doctor_view;
pub mod home_view;
pub mod login_view;
pub mod patient_view;
pub mod signup_view;

/// Top navigation bar: brand on the left, session controls on the
/// right.
pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_bar")
        .frame(styles::header_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::SKY,
                    egui::RichText::new("♥ MedConnect").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(state.debug_view_open, "Activity")
                        .clicked()
                    {
                        state.debug_view_open = !state.debug_view_open;
                    }
                    ui.add_space(12.0);

                    if state.session.is_authenticated() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        if let Some(profile) = state.session.profile() {
                            ui.colored_label(colors::TEXT_SECONDARY, profile.full_name());
                            avatar(ui, profile.initial(), profile.profile_picture.is_some());
                        }
                    } else {
                        match state.current_route {
                            Route::Home => {
                                if ui
                                    .add(
                                        egui::Button::new(
                                            egui::RichText::new("Sign Up")
                                                .color(colors::TEXT_ON_ACCENT),
                                        )
                                        .fill(colors::SKY),
                                    )
                                    .clicked()
                                {
                                    state.open_signup(Role::Patient);
                                }
                                if ui.button("Login").clicked() {
                                    state.navigate(Route::Login);
                                }
                            }
                            Route::Login | Route::Signup => {
                                if ui.button("← Back to Home").clicked() {
                                    state.navigate(Route::Home);
                                }
                            }
                            _ => {}
                        }
                    }
                });
            });
        });
}

/// Footer shown on every screen.
pub fn render_footer(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("footer")
        .frame(styles::header_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.colored_label(
                    colors::TEXT_MUTED,
                    egui::RichText::new("© 2025 MedConnect. All rights reserved.").size(12.0),
                );
            });
        });
}

/// Central panel dispatching on the current route. Every route change
/// has already passed the navigation guard.
pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    if state.debug_view_open {
        egui::TopBottomPanel::bottom("activity_log")
            .resizable(true)
            .show(ctx, |ui| debug_view::render(ui, state));
    }

    let frame = egui::Frame::new()
        .fill(colors::PAGE_BG)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_route {
            Route::Home => home_view::render(ui, state),
            Route::Login => login_view::render(ui, state),
            Route::Signup => signup_view::render(ui, state),
            Route::PatientDashboard => patient_view::render(ui, state),
            Route::DoctorDashboard => doctor_view::render(ui, state),
        });
}

/// Small round avatar: the profile initial, marked when a picture is
/// attached.
fn avatar(ui: &mut egui::Ui, initial: char, has_picture: bool) {
    let text = if has_picture {
        format!("{initial} ◙")
    } else {
        initial.to_string()
    };
    egui::Frame::new()
        .fill(colors::SKY_TINT)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.colored_label(colors::SKY_TEXT, egui::RichText::new(text).strong());
        });
}

/// Labeled single-line input with an optional inline error underneath.
pub(crate) fn form_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    password: bool,
    error: Option<&str>,
) {
    ui.label(
        egui::RichText::new(label)
            .size(13.0)
            .color(colors::TEXT_SECONDARY),
    );
    ui.add(
        egui::TextEdit::singleline(value)
            .desired_width(f32::INFINITY)
            .password(password),
    );
    if let Some(message) = error {
        ui.label(
            egui::RichText::new(message)
                .size(12.0)
                .color(colors::FIELD_ERROR),
        );
    }
    ui.add_space(8.0);
}

/// Exclusive Patient/Doctor toggle shared by the login and signup
/// forms.
pub(crate) fn role_toggle(ui: &mut egui::Ui, selected: &mut Role) {
    ui.horizontal(|ui| {
        for role in [Role::Patient, Role::Doctor] {
            let active = *selected == role;
            let fill = if active {
                styles::role_tint(role)
            } else {
                colors::BUTTON_NEUTRAL
            };
            let text_color = if active {
                styles::role_tint_text(role)
            } else {
                colors::TEXT_SECONDARY
            };
            let label = if active {
                format!("✔ {}", role.label())
            } else {
                role.label().to_string()
            };
            if ui
                .add_sized(
                    [130.0, 34.0],
                    egui::Button::new(egui::RichText::new(label).color(text_color)).fill(fill),
                )
                .clicked()
            {
                *selected = role;
            }
        }
    });
    ui.add_space(12.0);
}

/// Neutral placeholder for a view that expects an identity the session
/// does not hold. The guard normally prevents this state; rendering a
/// placeholder keeps it non-fatal if it ever occurs.
pub(crate) fn loading_placeholder(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.colored_label(colors::TEXT_MUTED, "Loading...");
    });
}
