//! Controls panel UI rendering
//!
//! Side panel for tweaking the parallax view configuration at runtime.

use crate::app::AppState;
use egui::Ui;

/// Result of user interaction with the controls panel
pub enum ControlsInteraction {
    /// Row count or seed changed; the feed must be regenerated
    RegenerateRequested,
    /// User asked to scroll back to the top
    ScrollToTopRequested,
}

/// Renders the controls panel.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<ControlsInteraction>` - User interaction result
pub fn render_controls_panel(ui: &mut Ui, state: &mut AppState) -> Option<ControlsInteraction> {
    let mut interaction = None;

    ui.heading("Header");
    ui.separator();

    let mut fixed = state.settings.expanded_height.is_some();
    if ui.checkbox(&mut fixed, "Fixed expanded height").changed() {
        state.set_fixed_height(fixed);
    }

    ui.add_enabled_ui(fixed, |ui| {
        if let Some(height) = state.settings.expanded_height.as_mut() {
            ui.add(egui::Slider::new(height, 80.0..=480.0).text("px"));
        } else {
            ui.label("Using the header's natural height");
        }
    });

    ui.checkbox(&mut state.settings.shows_indicators, "Show scroll indicators");

    ui.add_space(12.0);
    ui.heading("Content");
    ui.separator();

    let rows_changed = ui
        .add(egui::Slider::new(&mut state.settings.row_count, 0..=500).text("rows"))
        .changed();
    let seed_changed = ui
        .add(egui::DragValue::new(&mut state.settings.seed).prefix("seed: "))
        .changed();
    if rows_changed || seed_changed {
        interaction = Some(ControlsInteraction::RegenerateRequested);
    }

    ui.add_space(12.0);
    if ui.button("⬆ Back to top").clicked() {
        interaction = Some(ControlsInteraction::ScrollToTopRequested);
    }

    interaction
}
