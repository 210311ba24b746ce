//! Property-based tests for the navigation guard.

use medconnect::app::router::{self, dashboard_for, Destination};
use medconnect::app::{Role, Route, Session};
use proptest::prelude::*;

use crate::common::sample_profile;

fn arb_route() -> impl Strategy<Value = Route> {
    prop_oneof![
        Just(Route::Home),
        Just(Route::Login),
        Just(Route::Signup),
        Just(Route::PatientDashboard),
        Just(Route::DoctorDashboard),
    ]
}

fn arb_session_role() -> impl Strategy<Value = Option<Role>> {
    prop_oneof![
        Just(None),
        Just(Some(Role::Patient)),
        Just(Some(Role::Doctor)),
    ]
}

fn session_with(role: Option<Role>) -> Session {
    let mut session = Session::new();
    if let Some(role) = role {
        session.login(sample_profile(role));
    }
    session
}

proptest! {
    #[test]
    fn test_guard_is_deterministic(route in arb_route(), role in arb_session_role()) {
        let session = session_with(role);
        prop_assert_eq!(
            router::resolve(route, &session),
            router::resolve(route, &session)
        );
    }

    #[test]
    fn test_anonymous_sessions_never_render_guarded_views(route in arb_route()) {
        let session = Session::new();
        match router::resolve(route, &session) {
            Destination::Render(rendered) => {
                prop_assert!(rendered.required_role().is_none());
            }
            Destination::Redirect(target) => {
                prop_assert_eq!(target, Route::Login);
            }
        }
    }

    #[test]
    fn test_rendered_views_always_satisfy_their_role_requirement(
        route in arb_route(),
        role in arb_session_role(),
    ) {
        let session = session_with(role);
        if let Destination::Render(rendered) = router::resolve(route, &session) {
            if let Some(required) = rendered.required_role() {
                prop_assert_eq!(session.role(), Some(required));
            }
        }
    }

    #[test]
    fn test_mismatched_roles_redirect_to_own_dashboard(route in arb_route()) {
        for role in [Role::Patient, Role::Doctor] {
            let session = session_with(Some(role));
            if let Some(required) = route.required_role() {
                if required != role {
                    prop_assert_eq!(
                        router::resolve(route, &session),
                        Destination::Redirect(dashboard_for(role))
                    );
                }
            }
        }
    }

    #[test]
    fn test_arbitrary_paths_never_panic_and_fall_back_home(
        path in "[ -~]{0,24}",
        role in arb_session_role(),
    ) {
        let session = session_with(role);
        let outcome = router::resolve_path(&path, &session);
        if Route::from_path(&path).is_none() {
            prop_assert_eq!(outcome, Destination::Redirect(Route::Home));
        }
    }
}
