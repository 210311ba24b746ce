//! Form State Controllers
//!
//! Each form owns its transient per-field text state and a validation
//! pass that either produces a candidate [`UserProfile`] or a set of
//! user-visible error messages.
//!
//! [`UserProfile`]: crate::app::types::UserProfile

pub mod login;
pub mod signup;

pub use login::LoginForm;
pub use signup::{SignupField, SignupForm};
