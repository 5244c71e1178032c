//! Status bar UI rendering
//!
//! Shows the header state as reported through the collapse channel.

use crate::app::AppState;
use egui::RichText;

/// Renders the status bar at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let header_state = match state.collapse.latest() {
            Some(true) => "Collapsed",
            Some(false) => "Expanded",
            None => "Unknown",
        };
        ui.label(RichText::new(format!("Header: {}", header_state)).strong());
        ui.label(RichText::new("|").strong());

        let height = state
            .settings
            .expanded_height
            .map(|h| format!("{:.0} px", h))
            .unwrap_or_else(|| "natural".to_string());
        ui.label(RichText::new(format!("Expanded height: {}", height)).strong());
        ui.label(RichText::new("|").strong());

        ui.label(RichText::new(format!(
            "Rows: {} | Transitions: {}",
            state.rows.len(),
            state.collapse_notifications
        )).strong());
    });
}
