//! Route Table and Navigation Guard
//!
//! The one piece of nontrivial decision logic in the client: given a
//! requested route and the current session, decide whether to render
//! the target view or redirect. The guard is a pure function of its
//! inputs; the same (session, route) pair always yields the same
//! outcome.

use crate::app::session::Session;
use crate::app::types::Role;

/// Every screen the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Public landing page.
    Home,
    /// Login form.
    Login,
    /// Signup form.
    Signup,
    /// Patient-only dashboard.
    PatientDashboard,
    /// Doctor-only dashboard.
    DoctorDashboard,
}

impl Route {
    /// Parse a request path. Unknown paths return `None`; callers fall
    /// back to the landing page via [`resolve_path`].
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "/patient-dashboard" => Some(Route::PatientDashboard),
            "/doctor-dashboard" => Some(Route::DoctorDashboard),
            _ => None,
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::PatientDashboard => "/patient-dashboard",
            Route::DoctorDashboard => "/doctor-dashboard",
        }
    }

    /// Role required to view this route, if any.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::PatientDashboard => Some(Role::Patient),
            Route::DoctorDashboard => Some(Role::Doctor),
            Route::Home | Route::Login | Route::Signup => None,
        }
    }
}

/// Dashboard belonging to a role.
pub fn dashboard_for(role: Role) -> Route {
    match role {
        Role::Patient => Route::PatientDashboard,
        Role::Doctor => Route::DoctorDashboard,
    }
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Render the requested view.
    Render(Route),
    /// Navigate elsewhere instead; the caller re-evaluates.
    Redirect(Route),
}

/// Guard decision procedure.
///
/// 1. Guarded route, anonymous session: redirect to the login form.
/// 2. Guarded route, authenticated under a different role: redirect to
///    the session's own dashboard (silent reroute, not an error).
/// 3. Otherwise render the requested view.
pub fn resolve(requested: Route, session: &Session) -> Destination {
    if let Some(required) = requested.required_role() {
        match session.role() {
            None => return Destination::Redirect(Route::Login),
            Some(role) if role != required => {
                return Destination::Redirect(dashboard_for(role));
            }
            Some(_) => {}
        }
    }
    Destination::Render(requested)
}

/// Resolve a raw path. Unmatched paths redirect to the landing page
/// regardless of session state.
pub fn resolve_path(path: &str, session: &Session) -> Destination {
    match Route::from_path(path) {
        Some(route) => resolve(route, session),
        None => Destination::Redirect(Route::Home),
    }
}
