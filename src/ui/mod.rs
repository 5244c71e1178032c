//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the parallax demo:
//! - Controls panel (header height, indicators, feed size)
//! - Feed panel (the parallax scroll view itself)
//! - Status bar (collapse state reported by the widget)
//! - Panel manager (panel orchestration and layout)

pub mod controls_panel;
pub mod feed_panel;
pub mod status_bar;
pub mod panel_manager;
