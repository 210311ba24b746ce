//! Theme Module
//!
//! Color scheme and styling helpers for the MedConnect client: the
//! sky/emerald palette (sky for patients, emerald for doctors), frame
//! builders for cards and bars, and the global egui style.

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
