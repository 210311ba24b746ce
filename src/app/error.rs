//! Application Error Types
//!
//! Fatal error taxonomy for the client. Field validation failures never
//! appear here; they stay inside the form controllers as per-field
//! messages. What does appear here are the conditions that abort
//! startup (bad configuration) or signal a structural wiring defect
//! (session consumed outside its lifecycle).

use thiserror::Error;

use crate::app::config::ConfigError;

/// A consumer demanded an authenticated identity from a session that
/// has none. Inside the UI this is handled by rendering a placeholder;
/// reaching this error means a non-view consumer ran before the
/// application root established the session, which is a programming
/// defect rather than a user condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("session context accessed without an authenticated identity")]
pub struct SessionContextError;

/// Top-level fatal errors surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid runtime configuration; startup aborts loudly.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Structural misuse of the session lifecycle.
    #[error(transparent)]
    Session(#[from] SessionContextError),
}
