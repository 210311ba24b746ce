use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

use crate::app::config::Config;
use crate::app::debug::{DebugCategory, DebugLogger};
use crate::app::forms::{LoginForm, SignupForm};
use crate::app::picture::PictureChannel;
use crate::app::router::{self, dashboard_for, Destination, Route};
use crate::app::session::Session;
use crate::app::types::{Role, UserProfile};

/// Which form produced an in-flight submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Login,
    Register,
}

/// Payload sent back by the auth worker once the simulated delay has
/// elapsed. The mock backend always succeeds.
pub struct CompletedAuth {
    pub kind: SubmissionKind,
    pub profile: UserProfile,
}

/// Central application state shared across views. Owns the session,
/// both form controllers and all in-flight background work.
pub struct AppState {
    pub config: Config,
    pub session: Session,
    pub current_route: Route,
    pub login_form: LoginForm,
    pub signup_form: SignupForm,
    auth_result: Option<Receiver<CompletedAuth>>,
    pictures: PictureChannel,
    pub debug_logger: DebugLogger,
    pub debug_view_open: bool,
    pub debug_filter_category: Option<DebugCategory>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        let debug_logger = DebugLogger::new(1000);
        debug_logger.info(DebugCategory::Other, "AppState initialized");

        let mut state = Self {
            config,
            session: Session::new(),
            current_route: Route::Home,
            login_form: LoginForm::new(),
            signup_form: SignupForm::new(),
            auth_result: None,
            pictures: PictureChannel::new(),
            debug_logger,
            debug_view_open: false,
            debug_filter_category: None,
        };

        if let Some(path) = state.config.start_path().map(str::to_string) {
            state.navigate_path(&path);
        }

        state
    }

    /// Drain background work. Called once per frame before rendering.
    pub fn tick(&mut self) {
        self.poll_auth();
        self.poll_pictures();
    }

    /// Evaluate the guard for `requested` and follow redirects to a
    /// fixed point. Converges in at most two hops: redirect targets are
    /// either public or the session's own dashboard.
    pub fn navigate(&mut self, requested: Route) {
        let mut target = requested;
        loop {
            match router::resolve(target, &self.session) {
                Destination::Render(route) => {
                    self.current_route = route;
                    return;
                }
                Destination::Redirect(next) => {
                    self.debug_logger.debug(
                        DebugCategory::Route,
                        format!("{} redirected to {}", target.path(), next.path()),
                    );
                    target = next;
                }
            }
        }
    }

    /// Navigate by raw path; unmatched paths land on the home page.
    pub fn navigate_path(&mut self, path: &str) {
        match Route::from_path(path) {
            Some(route) => self.navigate(route),
            None => {
                self.debug_logger.debug(
                    DebugCategory::Route,
                    format!("unmatched path {path:?}, redirected to /"),
                );
                self.navigate(Route::Home);
            }
        }
    }

    /// Open the signup form with the role toggle pre-seeded from a
    /// navigation hint.
    pub fn open_signup(&mut self, role: Role) {
        self.signup_form = SignupForm::with_role(role);
        self.navigate(Route::Signup);
    }

    /// True while a submission is between submit and commit.
    pub fn auth_pending(&self) -> bool {
        self.auth_result.is_some()
    }

    pub fn handle_login(&mut self) {
        if self.auth_pending() {
            self.debug_logger
                .warn(DebugCategory::Form, "submit ignored, submission in flight");
            return;
        }

        if let Err(message) = self.login_form.validate() {
            self.debug_logger
                .warn(DebugCategory::Form, format!("login rejected: {message}"));
            self.login_form.error = Some(message);
            return;
        }

        self.login_form.error = None;
        self.login_form.submitting = true;
        self.spawn_auth(SubmissionKind::Login, self.login_form.build_profile());
    }

    pub fn handle_signup(&mut self) {
        if self.auth_pending() {
            self.debug_logger
                .warn(DebugCategory::Form, "submit ignored, submission in flight");
            return;
        }

        if !self.signup_form.validate() {
            self.debug_logger.warn(
                DebugCategory::Form,
                format!("signup rejected: {} field error(s)", self.signup_form.errors.len()),
            );
            return;
        }

        self.signup_form.submitting = true;
        self.spawn_auth(SubmissionKind::Register, self.signup_form.build_profile());
    }

    /// Simulate backend latency on a worker thread. Once started, a
    /// submission always completes and commits; there is no abort path.
    fn spawn_auth(&mut self, kind: SubmissionKind, profile: UserProfile) {
        let delay = self.config.auth_delay();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            let _ = tx.send(CompletedAuth { kind, profile });
        });
        self.auth_result = Some(rx);
    }

    /// Apply a completed submission: session mutation first, navigation
    /// immediately after in the same turn, so the guard never reads a
    /// stale session behind a finished login.
    fn poll_auth(&mut self) {
        let done = match &self.auth_result {
            Some(rx) => rx.try_recv().ok(),
            None => None,
        };
        let Some(done) = done else { return };
        self.auth_result = None;

        let role = done.profile.role;
        let email = done.profile.email.clone();
        match done.kind {
            SubmissionKind::Login => {
                self.session.login(done.profile);
                self.login_form.submitting = false;
                self.login_form.clear_password();
                self.debug_logger
                    .info(DebugCategory::Auth, format!("signed in {email} as {role}"));
            }
            SubmissionKind::Register => {
                self.session.register(done.profile);
                self.signup_form.submitting = false;
                self.signup_form.clear_passwords();
                self.debug_logger
                    .info(DebugCategory::Auth, format!("registered {email} as {role}"));
            }
        }

        self.navigate(dashboard_for(role));
    }

    /// Start loading the picture named by the signup form's path field.
    pub fn load_profile_picture(&mut self) {
        let path = self.signup_form.picture_path.trim().to_string();
        if path.is_empty() {
            self.signup_form.picture_error = Some("Choose an image file first".to_string());
            return;
        }
        self.signup_form.picture_error = None;
        self.debug_logger
            .debug(DebugCategory::Picture, format!("loading {path}"));
        self.pictures.start_load(PathBuf::from(path));
    }

    /// Apply completed picture loads in arrival order; when loads race,
    /// the last completion wins.
    fn poll_pictures(&mut self) {
        while let Some(result) = self.pictures.try_recv() {
            match result {
                Ok(picture) => {
                    self.debug_logger.info(
                        DebugCategory::Picture,
                        format!("attached {} ({} bytes)", picture.file_name, picture.byte_len),
                    );
                    self.signup_form.profile_picture = Some(picture.data_uri);
                    self.signup_form.picture_error = None;
                }
                Err(err) => {
                    self.debug_logger
                        .error(DebugCategory::Picture, err.to_string());
                    self.signup_form.picture_error = Some(format!("Could not load image: {err}"));
                }
            }
        }
    }

    /// Clear the session and all form state, then land on the login
    /// page.
    pub fn logout(&mut self) {
        self.session.logout();
        self.login_form = LoginForm::new();
        self.signup_form = SignupForm::new();
        self.debug_logger
            .info(DebugCategory::Auth, "logged out");
        self.navigate(Route::Login);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
