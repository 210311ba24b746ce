/**
 * Session Store Module
 *
 * Holds the single authentication state for the running client. The
 * session is owned by the application root and handed to views by
 * reference; immediate-mode rendering re-reads it every frame, so every
 * observer sees a mutation on the next route evaluation.
 */

use crate::app::error::SessionContextError;
use crate::app::types::{Role, UserProfile};

/// Current authentication state. Created empty at startup, set by
/// login/register, cleared by logout. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    profile: Option<UserProfile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Establish the session with the given identity. There is no
    /// stored record to verify against; login means "this is now the
    /// active identity".
    pub fn login(&mut self, profile: UserProfile) {
        tracing::info!(role = %profile.role, email = %profile.email, "session established");
        self.profile = Some(profile);
    }

    /// Registration signs the user in immediately. No uniqueness check
    /// exists; a second registration simply replaces the first.
    pub fn register(&mut self, profile: UserProfile) {
        tracing::info!(role = %profile.role, email = %profile.email, "account registered");
        self.profile = Some(profile);
    }

    /// Clear the session. Idempotent: logging out an anonymous session
    /// leaves it anonymous.
    pub fn logout(&mut self) {
        if self.profile.take().is_some() {
            tracing::info!("session cleared");
        }
    }

    /// True iff an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    /// The active identity, if any. Views treat `None` as a transient
    /// loading condition and render a placeholder.
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Role of the active identity, if any.
    pub fn role(&self) -> Option<Role> {
        self.profile.as_ref().map(|p| p.role)
    }

    /// The active identity, demanded. For consumers that must never run
    /// unauthenticated; an `Err` here is a wiring defect, not a user
    /// condition.
    pub fn require_profile(&self) -> Result<&UserProfile, SessionContextError> {
        self.profile.as_ref().ok_or(SessionContextError)
    }
}
