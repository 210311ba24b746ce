use eframe::egui;

use crate::app::forms::SignupField;
use crate::app::router::Route;
use crate::app::state::AppState;
use crate::app::theme::{colors, styles};
use crate::app::views::{form_field, role_toggle};

/// Signup form: full identity capture with per-field inline errors.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.set_max_width(560.0);

            styles::card_frame().show(ui, |ui| {
                ui.colored_label(
                    colors::TEXT_HEADING,
                    egui::RichText::new("Create your account")
                        .size(22.0)
                        .strong(),
                );
                ui.add_space(14.0);

                role_toggle(ui, &mut state.signup_form.role);

                ui.columns(2, |columns| {
                    let first_error = state
                        .signup_form
                        .error(SignupField::FirstName)
                        .map(str::to_string);
                    form_field(
                        &mut columns[0],
                        "First Name",
                        &mut state.signup_form.first_name,
                        false,
                        first_error.as_deref(),
                    );
                    let last_error = state
                        .signup_form
                        .error(SignupField::LastName)
                        .map(str::to_string);
                    form_field(
                        &mut columns[1],
                        "Last Name",
                        &mut state.signup_form.last_name,
                        false,
                        last_error.as_deref(),
                    );
                });

                picture_section(ui, state);

                let username_error = state
                    .signup_form
                    .error(SignupField::Username)
                    .map(str::to_string);
                form_field(
                    ui,
                    "Username",
                    &mut state.signup_form.username,
                    false,
                    username_error.as_deref(),
                );
                let email_error = state
                    .signup_form
                    .error(SignupField::Email)
                    .map(str::to_string);
                form_field(
                    ui,
                    "Email",
                    &mut state.signup_form.email,
                    false,
                    email_error.as_deref(),
                );

                ui.columns(2, |columns| {
                    let password_error = state
                        .signup_form
                        .error(SignupField::Password)
                        .map(str::to_string);
                    form_field(
                        &mut columns[0],
                        "Password",
                        &mut state.signup_form.password,
                        true,
                        password_error.as_deref(),
                    );
                    let confirm_error = state
                        .signup_form
                        .error(SignupField::ConfirmPassword)
                        .map(str::to_string);
                    form_field(
                        &mut columns[1],
                        "Confirm Password",
                        &mut state.signup_form.confirm_password,
                        true,
                        confirm_error.as_deref(),
                    );
                });

                ui.add_space(6.0);
                ui.colored_label(
                    colors::TEXT_HEADING,
                    egui::RichText::new("Address").size(16.0).strong(),
                );
                ui.add_space(6.0);

                let line1_error = state
                    .signup_form
                    .error(SignupField::AddressLine1)
                    .map(str::to_string);
                form_field(
                    ui,
                    "Address Line 1",
                    &mut state.signup_form.address_line1,
                    false,
                    line1_error.as_deref(),
                );
                ui.columns(2, |columns| {
                    let city_error = state
                        .signup_form
                        .error(SignupField::City)
                        .map(str::to_string);
                    form_field(
                        &mut columns[0],
                        "City",
                        &mut state.signup_form.city,
                        false,
                        city_error.as_deref(),
                    );
                    let state_error = state
                        .signup_form
                        .error(SignupField::State)
                        .map(str::to_string);
                    form_field(
                        &mut columns[1],
                        "State",
                        &mut state.signup_form.state,
                        false,
                        state_error.as_deref(),
                    );
                });
                let pincode_error = state
                    .signup_form
                    .error(SignupField::Pincode)
                    .map(str::to_string);
                form_field(
                    ui,
                    "Pincode",
                    &mut state.signup_form.pincode,
                    false,
                    pincode_error.as_deref(),
                );

                ui.add_space(16.0);
                let accent = styles::role_accent(state.signup_form.role);
                let submit = egui::Button::new(
                    egui::RichText::new("Create Account").color(colors::TEXT_ON_ACCENT),
                )
                .fill(accent)
                .min_size(egui::vec2(ui.available_width(), 38.0));
                if ui
                    .add_enabled(!state.signup_form.submitting, submit)
                    .clicked()
                {
                    state.handle_signup();
                }

                if state.signup_form.submitting {
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.colored_label(colors::TEXT_MUTED, "Creating account...");
                    });
                }

                ui.add_space(14.0);
                ui.horizontal(|ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, "Already have an account?");
                    if ui.link("Login here").clicked() {
                        state.navigate(Route::Login);
                    }
                });
            });
        });
    });
}

/// Picture picker: a path input plus a background load. The preview
/// reflects whatever load completed last.
fn picture_section(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(
        egui::RichText::new("Profile Picture")
            .size(13.0)
            .color(colors::TEXT_SECONDARY),
    );
    ui.horizontal(|ui| {
        let width = (ui.available_width() - 110.0).max(80.0);
        ui.add_sized(
            [width, 24.0],
            egui::TextEdit::singleline(&mut state.signup_form.picture_path)
                .hint_text("Path to an image file"),
        );
        if ui.button("Load Image").clicked() {
            state.load_profile_picture();
        }
    });
    if let Some(error) = state.signup_form.picture_error.clone() {
        ui.label(
            egui::RichText::new(error)
                .size(12.0)
                .color(colors::FIELD_ERROR),
        );
    } else if state.signup_form.profile_picture.is_some() {
        ui.colored_label(colors::EMERALD_DARK, "✔ Picture attached");
    }
    ui.add_space(8.0);
}
