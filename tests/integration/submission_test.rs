//! Login/signup submission flows, including the simulated latency and
//! the re-entrancy guard.

use std::io::Write;
use std::time::Duration;

use medconnect::app::forms::SignupField;
use medconnect::app::{AppState, Config, DebugCategory, Role, Route};
use pretty_assertions::assert_eq;

use crate::common::{fast_state, fill_signup, wait_for_auth};

#[test]
fn test_login_fabricates_patient_placeholder_identity() {
    let mut state = fast_state();
    state.navigate(Route::Login);
    state.login_form.email = "jdoe@example.com".to_string();
    state.login_form.password = "secret".to_string();
    state.handle_login();
    wait_for_auth(&mut state);

    let profile = state.session.profile().expect("session should be set");
    assert_eq!(profile.first_name, "John");
    assert_eq!(profile.last_name, "Doe");
    assert_eq!(profile.username, "jdoe");
    assert_eq!(profile.email, "jdoe@example.com");
    assert_eq!(profile.address.line1, "123 Main St");
    assert_eq!(profile.address.pincode, "62704");
    assert_eq!(profile.role, Role::Patient);
    assert_eq!(state.current_route, Route::PatientDashboard);
}

#[test]
fn test_login_fabricates_doctor_placeholder_identity() {
    let mut state = fast_state();
    state.login_form.email = "gregory@clinic.org".to_string();
    state.login_form.password = "secret".to_string();
    state.login_form.role = Role::Doctor;
    state.handle_login();
    wait_for_auth(&mut state);

    let profile = state.session.profile().expect("session should be set");
    assert_eq!(profile.first_name, "Dr. Jane");
    assert_eq!(profile.username, "gregory");
    assert_eq!(profile.role, Role::Doctor);
    assert_eq!(state.current_route, Route::DoctorDashboard);
}

#[test]
fn test_signup_flow_commits_assembled_profile() {
    let mut state = fast_state();
    state.open_signup(Role::Doctor);
    fill_signup(&mut state, Role::Doctor, "jane@clinic.org");
    state.handle_signup();
    assert!(state.signup_form.submitting);
    wait_for_auth(&mut state);

    assert_eq!(state.current_route, Route::DoctorDashboard);
    let profile = state.session.profile().expect("session should be set");
    assert_eq!(profile.full_name(), "Jane Doe");
    assert_eq!(profile.email, "jane@clinic.org");
    assert_eq!(profile.address.city, "Springfield");
    // Secrets are dropped from the form once the submission commits.
    assert!(state.signup_form.password.is_empty());
    assert!(state.signup_form.confirm_password.is_empty());
}

#[test]
fn test_empty_signup_reports_every_required_field() {
    let mut state = fast_state();
    state.open_signup(Role::Patient);
    state.handle_signup();
    assert!(!state.auth_pending());
    assert_eq!(state.signup_form.errors.len(), SignupField::ALL.len());
    assert_eq!(state.current_route, Route::Signup);
}

#[test]
fn test_rapid_double_submit_commits_exactly_once() {
    // A visible delay so the second submit definitely lands while the
    // first is still in flight.
    let mut state = AppState::with_config(
        Config::builder()
            .auth_delay(Duration::from_millis(50))
            .build(),
    );
    state.login_form.email = "first@example.com".to_string();
    state.login_form.password = "secret".to_string();
    state.handle_login();
    state.login_form.email = "second@example.com".to_string();
    state.handle_login();
    wait_for_auth(&mut state);

    let profile = state.session.profile().expect("session should be set");
    assert_eq!(profile.email, "first@example.com");
    let commits = state.debug_logger.get_entries_by_category(DebugCategory::Auth);
    assert_eq!(commits.len(), 1, "exactly one session mutation");
}

#[test]
fn test_role_hint_flows_from_landing_to_signup() {
    let mut state = fast_state();
    state.open_signup(Role::Doctor);
    assert_eq!(state.current_route, Route::Signup);
    assert_eq!(state.signup_form.role, Role::Doctor);

    // The toggle stays free until submission.
    state.signup_form.role = Role::Patient;
    fill_signup(&mut state, Role::Patient, "pat@example.com");
    state.handle_signup();
    wait_for_auth(&mut state);
    assert_eq!(state.current_route, Route::PatientDashboard);
}

#[test]
fn test_attached_picture_lands_in_registered_profile() {
    let mut state = fast_state();
    state.open_signup(Role::Patient);

    let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    file.write_all(b"portrait-bytes").unwrap();
    state.signup_form.picture_path = file.path().display().to_string();
    state.load_profile_picture();
    for _ in 0..500 {
        state.tick();
        if state.signup_form.profile_picture.is_some() {
            break;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    let uri = state
        .signup_form
        .profile_picture
        .clone()
        .expect("picture should be attached");
    assert!(uri.starts_with("data:image/png;base64,"));

    fill_signup(&mut state, Role::Patient, "pat@example.com");
    state.handle_signup();
    wait_for_auth(&mut state);
    let profile = state.session.profile().expect("session should be set");
    assert_eq!(profile.profile_picture.as_deref(), Some(uri.as_str()));
}
