//! Panel orchestration and layout management.
//!
//! Coordinates the controls, status and feed panels.

use crate::app::AppState;
use crate::ui::{controls_panel, feed_panel, status_bar};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// Feed rows must be regenerated from the current settings
    RegenerateRequested,
    /// The feed should scroll back to the top
    ScrollToTopRequested,
    /// A feed row was clicked
    RowClicked(usize),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Left panel: controls
        egui::SidePanel::left("controls_panel")
            .default_width(220.0)
            .resizable(true)
            .frame(egui::Frame::default()
                .inner_margin(egui::Margin::same(8))
                .fill(ctx.style().visuals.panel_fill))
            .show(ctx, |ui| {
                if let Some(controls_interaction) = controls_panel::render_controls_panel(ui, state) {
                    interaction = Some(match controls_interaction {
                        controls_panel::ControlsInteraction::RegenerateRequested => {
                            PanelInteraction::RegenerateRequested
                        }
                        controls_panel::ControlsInteraction::ScrollToTopRequested => {
                            PanelInteraction::ScrollToTopRequested
                        }
                    });
                }
            });

        // Central panel: the parallax feed fills the remaining space
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(ctx.style().visuals.panel_fill))
            .show(ctx, |ui| {
                if let Some(feed_panel::FeedInteraction::RowClicked(index)) =
                    feed_panel::render_feed_panel(ui, state)
                {
                    interaction = Some(PanelInteraction::RowClicked(index));
                }
            });

        interaction
    }
}
