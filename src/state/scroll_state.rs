//! Per-instance scroll state.
//!
//! This module holds the only mutable state of a parallax scroll view:
//! the observed scroll origin, the header measurement, and the last collapsed
//! flag that was reported to the host.

use crate::geometry::HeaderGeometry;
use crate::state::Measurement;
use egui::{Context, Id, Vec2};

/// State owned by one `ParallaxScrollView`.
///
/// Responsibilities:
/// - Tracking the scroll body origin reported by the offset reader
/// - Holding the one-time header measurement
/// - Deduplicating collapse notifications
///
/// Lives in egui's temporary memory between frames, keyed by the view's id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    /// Origin of the scroll body in the container's coordinate space (only `y` is used)
    offset: Vec2,
    /// Natural header height measurement
    measurement: Measurement,
    /// Collapsed flag most recently reported to the host
    last_notified: Option<bool>,
}

impl ScrollState {
    /// Creates a fresh state: at rest, unmeasured, nothing reported.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the state stored for `id`, if any.
    pub fn load(ctx: &Context, id: Id) -> Option<Self> {
        ctx.data_mut(|d| d.get_temp::<Self>(id))
    }

    /// Stores the state under `id` for the next frame.
    pub fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.insert_temp(id, self));
    }

    // ===== Queries =====

    /// Returns the vertical scroll origin.
    pub fn offset_y(&self) -> f32 {
        self.offset.y
    }

    /// Returns the header measurement.
    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    /// Returns the measured header height, `0.0` until measured.
    pub fn measured_height(&self) -> f32 {
        self.measurement.height()
    }

    /// Returns the collapsed flag last reported to the host.
    pub fn last_notified(&self) -> Option<bool> {
        self.last_notified
    }

    /// Derives the header geometry for the current offset and measurement.
    pub fn geometry(&self, expanded_height: Option<f32>) -> HeaderGeometry {
        HeaderGeometry::compute(self.offset.y, self.measured_height(), expanded_height)
    }

    // ===== Mutations =====

    /// Records a new scroll body origin. Returns true if it differs from the previous one.
    pub fn set_offset(&mut self, offset: Vec2) -> bool {
        if self.offset == offset {
            return false;
        }
        self.offset = offset;
        true
    }

    /// Returns a mutable reference to the measurement (for the header sizing pass).
    pub(crate) fn measurement_mut(&mut self) -> &mut Measurement {
        &mut self.measurement
    }

    /// Registers the current collapsed flag.
    ///
    /// Returns `Some(flag)` on the first call and whenever the flag changed,
    /// `None` otherwise.
    pub fn take_collapse_change(&mut self, is_collapsed: bool) -> Option<bool> {
        if self.last_notified == Some(is_collapsed) {
            return None;
        }
        self.last_notified = Some(is_collapsed);
        Some(is_collapsed)
    }
}
