//! State Management Layer
//!
//! Settings live in one GPUI entity shared through a global store. Views
//! observe it; changes are written back to disk off the main thread.

pub mod settings;
pub mod store;

pub use settings::LandingSettings;
pub use store::{LandingGlobalStore, update_settings_and_save};
