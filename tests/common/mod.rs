//! Shared fixtures and helpers for the MedConnect test suite.

use std::time::Duration;

use medconnect::app::{Address, AppState, Config, Role, UserProfile};

/// Application state with the simulated latency removed, so flows
/// complete as fast as the channel can deliver them.
pub fn fast_state() -> AppState {
    AppState::with_config(Config::builder().auth_delay(Duration::ZERO).build())
}

/// Poll until the in-flight submission commits.
pub fn wait_for_auth(state: &mut AppState) {
    for _ in 0..500 {
        state.tick();
        if !state.auth_pending() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("submission did not complete");
}

pub fn sample_profile(role: Role) -> UserProfile {
    UserProfile {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        profile_picture: None,
        username: "jdoe".to_string(),
        email: "jdoe@example.com".to_string(),
        password: "secret".to_string(),
        address: Address {
            line1: "123 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            pincode: "62704".to_string(),
        },
        role,
    }
}

/// Fill every signup field with valid values for the given role.
pub fn fill_signup(state: &mut AppState, role: Role, email: &str) {
    state.signup_form.role = role;
    state.signup_form.first_name = "Jane".to_string();
    state.signup_form.last_name = "Doe".to_string();
    state.signup_form.username = "janedoe".to_string();
    state.signup_form.email = email.to_string();
    state.signup_form.password = "secret".to_string();
    state.signup_form.confirm_password = "secret".to_string();
    state.signup_form.address_line1 = "1 Clinic Way".to_string();
    state.signup_form.city = "Springfield".to_string();
    state.signup_form.state = "IL".to_string();
    state.signup_form.pincode = "62704".to_string();
}
