//! Parallax Scroll Demo Application
//!
//! Hosts a `ParallaxScrollView` in an eframe window:
//! - A cover background that shrinks and dims as the feed scrolls
//! - A title header that pins as a compact bar once collapsed
//! - A controls panel for the expanded height, scroll indicators and feed size
//! - A status bar subscribed to the widget's collapse channel
//!
//! The application is split into:
//! - `app/` - Application state and settings persistence
//! - `io/` - Placeholder content generation
//! - `ui/` - Panel rendering and orchestration
//!
//! Usage: `parallax-demo [settings.json]`. Set `RUST_LOG=debug` to trace header transitions.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod app;
mod io;
mod ui;

use app::{AppState, SettingsCoordinator, SETTINGS_KEY};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes logging and launches the demo window.
fn main() -> eframe::Result {
    env_logger::init();

    // Optional settings file as the first argument
    let settings_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("Parallax Scroll Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Parallax Scroll Demo",
        options,
        Box::new(move |cc| Ok(Box::new(ParallaxDemoApp::new(cc, settings_path)))),
    )
}

/// The demo application.
struct ParallaxDemoApp {
    /// Centralized application state
    state: AppState,
}

impl ParallaxDemoApp {
    /// Creates the app with settings resolved from the CLI file, the config dir or storage.
    fn new(cc: &eframe::CreationContext, settings_path: Option<PathBuf>) -> Self {
        let settings = SettingsCoordinator::resolve(cc.storage, settings_path.as_deref());
        log::debug!("Starting with {:?}", settings);

        Self {
            state: AppState::with_settings(settings),
        }
    }

    /// Applies panel interactions to the application state.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::RegenerateRequested => {
                self.state.regenerate_rows();
            }
            PanelInteraction::ScrollToTopRequested => {
                self.state.pending_scroll = Some(0.0);
            }
            PanelInteraction::RowClicked(index) => {
                if let Some(row) = self.state.rows.get(index) {
                    log::info!("Selected {}", row.title);
                }
            }
        }
    }
}

impl eframe::App for ParallaxDemoApp {
    /// Called when the app is being shut down - ensures settings are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_setting(storage, SETTINGS_KEY, &self.state.settings);
    }

    /// Renders all panels and applies the resulting interaction.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}
