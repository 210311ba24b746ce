//! MedConnect - Main Library
//!
//! MedConnect is a native desktop client connecting patients and
//! doctors. The whole product is client-side: registration, login and
//! the role dashboards operate on an in-memory session, with
//! authentication simulated by a timed local state mutation.
//!
//! # Overview
//!
//! The library exposes everything the binary and the test suites need:
//!
//! - **Session store** - the single authentication state, set by
//!   login/register and cleared by logout
//! - **Form controllers** - transient field state plus the validation
//!   passes that produce an identity record
//! - **Navigation guard** - the decision procedure that renders or
//!   redirects every requested route against the current session
//! - **Views** - egui renderers for the landing page, the forms and
//!   the role dashboards
//!
//! # Module Structure
//!
//! Everything lives under [`app`]; see its module documentation for
//! the file map.
//!
//! # Thread Safety
//!
//! The UI is single-threaded immediate mode. Background work (the
//! simulated authentication delay, picture conversion) runs on worker
//! threads and reports back over mpsc channels drained once per frame.

/// Native desktop client
pub mod app;
