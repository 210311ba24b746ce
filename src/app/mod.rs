//! MedConnect Native Desktop Client
//!
//! Native desktop application built on egui/eframe. Registration,
//! login and the role dashboards all run against an in-memory session;
//! authentication is simulated with a timed local state mutation and
//! nothing leaves the process.
//!
//! # Module Structure
//!
//! ```text
//! app/
//! ├── mod.rs      - Module exports and documentation
//! ├── main.rs     - Application entry point (binary)
//! ├── config.rs   - Runtime configuration
//! ├── error.rs    - Fatal error taxonomy
//! ├── types.rs    - Identity record model
//! ├── session.rs  - Session store
//! ├── router.rs   - Route table and navigation guard
//! ├── forms/      - Login and signup form controllers
//! ├── picture.rs  - Background profile-picture loading
//! ├── state/      - Central application state
//! ├── debug.rs    - In-app activity log
//! ├── theme/      - Colors and styling
//! └── views/      - Screen renderers
//! ```

pub mod config;
pub mod debug;
pub mod error;
pub mod forms;
pub mod picture;
pub mod router;
pub mod session;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use debug::{DebugCategory, DebugLevel, DebugLogger};
pub use error::{AppError, SessionContextError};
pub use router::{Destination, Route};
pub use session::Session;
pub use state::AppState;
pub use types::{Address, Role, UserProfile};
