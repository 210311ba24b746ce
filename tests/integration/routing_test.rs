//! Navigation guard behavior exercised through the application state.

use medconnect::app::router::{self, Destination};
use medconnect::app::{Role, Route, Session};
use pretty_assertions::assert_eq;

use crate::common::{fast_state, sample_profile, wait_for_auth};

#[test]
fn test_anonymous_dashboard_requests_land_on_login() {
    for path in ["/patient-dashboard", "/doctor-dashboard"] {
        let mut state = fast_state();
        state.navigate_path(path);
        assert_eq!(state.current_route, Route::Login, "path {path}");
        assert!(!state.session.is_authenticated());
    }
}

#[test]
fn test_cross_role_requests_reroute_silently() {
    let mut state = fast_state();
    state.session.register(sample_profile(Role::Patient));
    state.navigate(Route::DoctorDashboard);
    assert_eq!(state.current_route, Route::PatientDashboard);

    let mut state = fast_state();
    state.session.register(sample_profile(Role::Doctor));
    state.navigate(Route::PatientDashboard);
    assert_eq!(state.current_route, Route::DoctorDashboard);
}

#[test]
fn test_unmatched_paths_redirect_home_for_any_session() {
    let mut anonymous = fast_state();
    anonymous.navigate_path("/nonsense");
    assert_eq!(anonymous.current_route, Route::Home);

    let mut authenticated = fast_state();
    authenticated.session.register(sample_profile(Role::Doctor));
    authenticated.navigate_path("/also/nonsense");
    assert_eq!(authenticated.current_route, Route::Home);
}

#[test]
fn test_register_round_trip() {
    let mut session = Session::new();
    let profile = sample_profile(Role::Patient);
    session.register(profile.clone());
    assert!(session.is_authenticated());
    assert_eq!(session.profile(), Some(&profile));
}

#[test]
fn test_logout_is_idempotent_on_anonymous_session() {
    let mut session = Session::new();
    session.logout();
    assert!(!session.is_authenticated());
    session.logout();
    assert!(!session.is_authenticated());
}

#[test]
fn test_logout_after_login_returns_to_login_view() {
    let mut state = fast_state();
    state.login_form.email = "jdoe@example.com".to_string();
    state.login_form.password = "secret".to_string();
    state.handle_login();
    wait_for_auth(&mut state);
    assert_eq!(state.current_route, Route::PatientDashboard);

    state.logout();
    assert!(!state.session.is_authenticated());
    assert_eq!(state.current_route, Route::Login);
}

#[test]
fn test_guard_outcomes_are_pure_functions_of_inputs() {
    let mut session = Session::new();
    session.register(sample_profile(Role::Patient));
    for route in [
        Route::Home,
        Route::Login,
        Route::Signup,
        Route::PatientDashboard,
        Route::DoctorDashboard,
    ] {
        let first = router::resolve(route, &session);
        let second = router::resolve(route, &session);
        assert_eq!(first, second);
    }
}

#[test]
fn test_resolve_reports_redirect_not_render_for_guarded_routes() {
    let session = Session::new();
    assert_eq!(
        router::resolve(Route::PatientDashboard, &session),
        Destination::Redirect(Route::Login)
    );
    assert!(matches!(
        router::resolve(Route::Home, &session),
        Destination::Render(Route::Home)
    ));
}
