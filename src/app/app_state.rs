//! Centralized application state for the parallax demo.

use crate::io::{generate_rows, FeedRow};
use parallax_scroll::{collapse_channel, CollapseSink, CollapseSubscriber, ParallaxSettings};

/// Default resting height used when switching back from a measured header.
pub const DEFAULT_EXPANDED_HEIGHT: f32 = 300.0;

/// Main application state.
pub struct AppState {
    /// Active widget configuration
    pub settings: ParallaxSettings,

    /// Rows shown in the scroll body
    pub rows: Vec<FeedRow>,

    /// Host side of the collapse channel
    pub collapse: CollapseSubscriber,

    /// Widget side of the collapse channel, cloned into each frame's header
    sink: CollapseSink,

    /// Number of collapse notifications received through the callback
    pub collapse_notifications: usize,

    /// Scroll offset to apply on the next frame (e.g. "back to top")
    pub pending_scroll: Option<f32>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(ParallaxSettings::default())
    }
}

impl AppState {
    /// Creates state for the given settings, generating the feed rows.
    pub fn with_settings(settings: ParallaxSettings) -> Self {
        let (sink, collapse) = collapse_channel();
        Self {
            rows: generate_rows(settings.row_count, settings.seed),
            settings,
            collapse,
            sink,
            collapse_notifications: 0,
            pending_scroll: None,
        }
    }

    /// Returns a sink to attach to this frame's header.
    pub fn collapse_sink(&self) -> CollapseSink {
        self.sink.clone()
    }

    /// Regenerates the feed from the current row count and seed.
    pub fn regenerate_rows(&mut self) {
        self.rows = generate_rows(self.settings.row_count, self.settings.seed);
    }

    /// Switches between a fixed expanded height and the header's natural height.
    pub fn set_fixed_height(&mut self, fixed: bool) {
        self.settings.expanded_height = if fixed {
            Some(self.settings.expanded_height.unwrap_or(DEFAULT_EXPANDED_HEIGHT))
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_settings() {
        let state = AppState::with_settings(ParallaxSettings {
            row_count: 4,
            ..ParallaxSettings::default()
        });
        assert_eq!(state.rows.len(), 4);
    }

    #[test]
    fn test_toggle_fixed_height() {
        let mut state = AppState::default();
        state.set_fixed_height(false);
        assert_eq!(state.settings.expanded_height, None);
        state.set_fixed_height(true);
        assert_eq!(state.settings.expanded_height, Some(DEFAULT_EXPANDED_HEIGHT));
    }

    #[test]
    fn test_sink_feeds_subscriber() {
        let state = AppState::default();
        state.collapse_sink().emit(true);
        assert_eq!(state.collapse.latest(), Some(true));
    }
}
