//! Offset-driven header geometry.
//!
//! Every value here is a pure function of the vertical scroll offset, the
//! measured header height and the optional expanded height. Nothing is cached:
//! the container recomputes the geometry each frame.
//!
//! Sign convention: `offset` is the origin of the top of the scroll body in the
//! container's coordinate space. It is `0.0` at rest, negative once the user has
//! scrolled down and positive while over-scrolling past the top.

/// Derived header and background placement for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderGeometry {
    /// Height of the header at rest (the configured height, or the measured one)
    pub expanded_height: f32,
    /// Height of the slot the header occupies inside the scroll body
    pub header_height: f32,
    /// Vertical translation applied to the header inside its slot
    pub header_offset: f32,
    /// Height of the background frame
    pub background_height: f32,
    /// Vertical translation applied to the background frame
    pub background_offset: f32,
    /// Offset past which the header is pinned (`measured - expanded`, usually <= 0)
    pub collapse_threshold: f32,
    /// Whether the header has shrunk to its measured size
    pub is_collapsed: bool,
}

impl HeaderGeometry {
    /// Computes the geometry for a scroll offset.
    ///
    /// # Arguments
    /// * `offset` - Vertical origin of the scroll body (see module docs)
    /// * `measured_height` - Natural height of the header view
    /// * `expanded_height` - Configured resting height, `None` to use `measured_height`
    pub fn compute(offset: f32, measured_height: f32, expanded_height: Option<f32>) -> Self {
        let expanded = expanded_height.unwrap_or(measured_height);
        let overscroll = offset.max(0.0);

        let header_height = expanded + overscroll;
        let background_height = header_height + overscroll;
        let collapse_threshold = measured_height - expanded;

        let background_offset = if offset < 0.0 {
            offset.max(collapse_threshold)
        } else {
            0.0
        };

        let header_offset = if offset < collapse_threshold {
            collapse_threshold - offset
        } else {
            0.0
        };

        // An unset expanded height collapses at the threshold itself; a configured
        // one only strictly past it.
        let is_collapsed = if expanded_height.is_none() {
            background_offset >= offset
        } else {
            background_offset > offset
        };

        Self {
            expanded_height: expanded,
            header_height,
            header_offset,
            background_height,
            background_offset,
            collapse_threshold,
            is_collapsed,
        }
    }

    /// Opacity of the in-body header: visible while expanded, hidden once collapsed.
    pub fn header_opacity(&self) -> f32 {
        if self.is_collapsed { 0.0 } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEASURED: f32 = 80.0;
    const EXPANDED: f32 = 300.0;

    #[test]
    fn test_overscroll_grows_header_and_background() {
        for offset in [0.0, 1.0, 12.5, 40.0, 200.0] {
            let g = HeaderGeometry::compute(offset, MEASURED, Some(EXPANDED));
            assert_eq!(g.header_height, EXPANDED + offset);
            assert_eq!(g.background_height, g.header_height + offset);
            assert_eq!(g.background_offset, 0.0);
            assert_eq!(g.header_offset, 0.0);
        }
    }

    #[test]
    fn test_background_tracks_scroll_before_threshold() {
        let threshold = MEASURED - EXPANDED;
        for offset in [threshold, -200.0, -100.0, -0.5] {
            let g = HeaderGeometry::compute(offset, MEASURED, Some(EXPANDED));
            assert_eq!(g.background_offset, offset);
            assert_eq!(g.header_offset, 0.0);
            assert_eq!(g.header_height, EXPANDED);
        }
    }

    #[test]
    fn test_pinned_past_threshold() {
        let threshold = MEASURED - EXPANDED;
        for offset in [threshold - 0.5, -250.0, -1000.0] {
            let g = HeaderGeometry::compute(offset, MEASURED, Some(EXPANDED));
            assert_eq!(g.background_offset, threshold);
            assert_eq!(g.header_offset, threshold - offset);
            assert!(g.is_collapsed);
        }
    }

    #[test]
    fn test_boundary_is_exclusive_with_expanded_height() {
        let threshold = MEASURED - EXPANDED;
        let g = HeaderGeometry::compute(threshold, MEASURED, Some(EXPANDED));
        assert!(!g.is_collapsed);
    }

    #[test]
    fn test_boundary_is_inclusive_without_expanded_height() {
        let g = HeaderGeometry::compute(0.0, MEASURED, None);
        assert_eq!(g.collapse_threshold, 0.0);
        assert_eq!(g.expanded_height, MEASURED);
        assert!(g.is_collapsed);
    }

    #[test]
    fn test_resting_scenario() {
        let g = HeaderGeometry::compute(0.0, MEASURED, Some(EXPANDED));
        assert_eq!(g.header_height, 300.0);
        assert_eq!(g.background_height, 300.0);
        assert_eq!(g.header_offset, 0.0);
        assert_eq!(g.background_offset, 0.0);
        assert!(!g.is_collapsed);
        assert_eq!(g.header_opacity(), 1.0);
    }

    #[test]
    fn test_scrolled_past_threshold_scenario() {
        let g = HeaderGeometry::compute(-250.0, MEASURED, Some(EXPANDED));
        assert_eq!(g.collapse_threshold, -220.0);
        assert_eq!(g.background_offset, -220.0);
        assert_eq!(g.header_offset, 30.0);
        assert!(g.is_collapsed);
        assert_eq!(g.header_opacity(), 0.0);
    }

    #[test]
    fn test_compute_is_pure() {
        let a = HeaderGeometry::compute(-123.0, MEASURED, Some(EXPANDED));
        let b = HeaderGeometry::compute(-123.0, MEASURED, Some(EXPANDED));
        assert_eq!(a, b);
    }

    #[test]
    fn test_undersized_expanded_height_degrades_without_panicking() {
        // Expanded smaller than the header: threshold turns positive
        let g = HeaderGeometry::compute(0.0, MEASURED, Some(40.0));
        assert_eq!(g.collapse_threshold, 40.0);
        assert_eq!(g.header_offset, 40.0);
        assert!(!g.is_collapsed);
    }
}
