//! Application-level modules for the parallax demo.
//!
//! This module contains centralized state and settings persistence.

mod app_state;
mod settings_coordinator;

pub use app_state::AppState;
pub use settings_coordinator::{SettingsCoordinator, SETTINGS_KEY};
