//! State management for the parallax scroll view.
//!
//! This module contains state-only logic (no UI concerns):
//! - Measurement (one-time natural size capture)
//! - Scroll state (observed offset, measurement, reported collapse flag)

mod measurement;
mod scroll_state;

pub use measurement::Measurement;
pub use scroll_state::ScrollState;
