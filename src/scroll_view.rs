//! Scroll view with a collapsible parallax header.
//!
//! Composition, back to front:
//! - the background, sized and offset from the header geometry
//! - a vertical [`ScrollArea`] whose body is: offset reader, header slot, content
//! - while collapsed: the background again on top of the body, then a compact header copy
//!
//! The offset reader publishes the body's origin through a [`GeometryChannel`]
//! scoped to this instance; the new offset is consumed after the body has been
//! laid out and drives the next frame's geometry.

use crate::geometry::HeaderGeometry;
use crate::header::{BackgroundFn, HeaderFn, ParallaxHeader};
use crate::observe::{CoordinateSpace, GeometryChannel, ObserveGeometry};
use crate::state::{Measurement, ScrollState};
use egui::scroll_area::ScrollBarVisibility;
use egui::{pos2, vec2, Id, Pos2, Rect, ScrollArea, Sense, Ui, UiBuilder};

const SCROLL_OFFSET_KEY: &str = "scroll_offset";

/// Result of [`ParallaxScrollView::show`].
pub struct ParallaxScrollOutput<R> {
    /// What the content closure returned
    pub inner: R,
    /// Persistent id of this instance (see [`ParallaxScrollView::load_state`])
    pub id: Id,
    /// Geometry used to render this frame
    pub geometry: HeaderGeometry,
    /// State after consuming this frame's scroll offset
    pub state: ScrollState,
}

/// A vertical scroll view with a parallax header.
///
/// ```ignore
/// ParallaxScrollView::new(|| {
///     ParallaxHeader::new(
///         Some(300.0),
///         |ui| { ui.heading("Title"); },
///         |ui, collapsed| paint_cover(ui, collapsed),
///     )
/// })
/// .on_collapse_change(|collapsed| log::info!("collapsed: {collapsed}"))
/// .show(ui, |ui| {
///     for i in 0..100 {
///         ui.label(format!("Row {i}"));
///     }
/// });
/// ```
pub struct ParallaxScrollView<'a> {
    id_salt: Id,
    shows_indicators: bool,
    scroll_to: Option<f32>,
    header: ParallaxHeader<'a>,
    on_collapse_change: Box<dyn FnMut(bool) + 'a>,
}

impl<'a> ParallaxScrollView<'a> {
    /// Creates a scroll view from a header builder.
    pub fn new(parallax_header: impl FnOnce() -> ParallaxHeader<'a>) -> Self {
        Self {
            id_salt: Id::new("parallax_scroll_view"),
            shows_indicators: true,
            scroll_to: None,
            header: parallax_header(),
            on_collapse_change: Box::new(|_| {}),
        }
    }

    /// Distinguishes several scroll views inside the same parent `Ui`.
    pub fn id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id_salt = Id::new(id_salt);
        self
    }

    /// Shows or hides the scroll bar (shown when needed by default).
    pub fn shows_indicators(mut self, shows_indicators: bool) -> Self {
        self.shows_indicators = shows_indicators;
        self
    }

    /// Scrolls the body to `offset` pixels from the top for this frame.
    pub fn scroll_to(mut self, offset: f32) -> Self {
        self.scroll_to = Some(offset);
        self
    }

    /// Called on the first frame and whenever the collapsed flag changes.
    pub fn on_collapse_change(mut self, on_collapse_change: impl FnMut(bool) + 'a) -> Self {
        self.on_collapse_change = Box::new(on_collapse_change);
        self
    }

    /// Reads the state stored for the instance `id` (from [`ParallaxScrollOutput::id`]).
    pub fn load_state(ctx: &egui::Context, id: Id) -> Option<ScrollState> {
        ScrollState::load(ctx, id)
    }

    /// Lays out the view in the remaining space of `ui`, with `add_contents` below the header.
    pub fn show<R>(
        self,
        ui: &mut Ui,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> ParallaxScrollOutput<R> {
        let Self {
            id_salt,
            shows_indicators,
            scroll_to,
            mut header,
            mut on_collapse_change,
        } = self;

        let ctx = ui.ctx().clone();
        let id = ui.make_persistent_id(id_salt);
        let mut state = ScrollState::load(&ctx, id).unwrap_or_default();
        let geometry = state.geometry(header.expanded_height);

        let outer_rect = ui.available_rect_before_wrap();
        let space = CoordinateSpace::establish(&ctx, id.with("coordinate_space"), outer_rect.min);
        let channel = GeometryChannel::<Pos2>::scoped(id, SCROLL_OFFSET_KEY);

        if !geometry.is_collapsed {
            draw_background(ui, &mut header.background, &geometry, outer_rect);
        }

        let visibility = if shows_indicators {
            ScrollBarVisibility::VisibleWhenNeeded
        } else {
            ScrollBarVisibility::AlwaysHidden
        };
        let mut scroll_area = ScrollArea::vertical()
            .id_salt(id.with("scroll_area"))
            .auto_shrink([false, false])
            .scroll_bar_visibility(visibility);
        if let Some(offset) = scroll_to {
            scroll_area = scroll_area.vertical_scroll_offset(offset);
        }

        let measurement = state.measurement_mut();
        let header_fn = &mut header.header;
        let (inner, measured_now) = scroll_area
            .show(ui, |ui| {
                // Reader, slot and content stack without gaps; the header itself
                // keeps the host's spacing so every copy lays out the same way
                let item_spacing = ui.spacing().item_spacing;
                ui.spacing_mut().item_spacing.y = 0.0;
                offset_reader(ui, &channel, &space);
                let slot_rect = allocate_header_slot(ui, &geometry);
                ui.spacing_mut().item_spacing = item_spacing;

                let measured_now = header_slot(ui, header_fn, slot_rect, &geometry, measurement);
                (add_contents(ui), measured_now)
            })
            .inner;

        if geometry.is_collapsed {
            draw_background(ui, &mut header.background, &geometry, outer_rect);
            draw_compact_header(ui, &mut header.header, state.measured_height(), outer_rect);
        }

        if measured_now {
            log::debug!("parallax header {:?} measured at {:.1}px", id, state.measured_height());
            ctx.request_repaint();
        }

        if let Some(origin) = channel.take_changed(&ctx) {
            if state.set_offset(origin.to_vec2()) {
                log::trace!("parallax header {:?} offset {:.1}", id, origin.y);
                ctx.request_repaint();
            }
        }

        let settled = state.geometry(header.expanded_height);
        if let Some(is_collapsed) = state.take_collapse_change(settled.is_collapsed) {
            log::debug!("parallax header {:?} collapsed: {}", id, is_collapsed);
            if let Some(sink) = &header.collapse_sink {
                sink.emit(is_collapsed);
            }
            on_collapse_change(is_collapsed);
        }

        state.clone().store(&ctx, id);

        ParallaxScrollOutput {
            inner,
            id,
            geometry,
            state,
        }
    }
}

/// Zero-height row publishing the body origin in the container's coordinate space.
fn offset_reader(ui: &mut Ui, channel: &GeometryChannel<Pos2>, space: &CoordinateSpace) {
    ui.allocate_response(vec2(ui.available_width(), 0.0), Sense::hover())
        .publish_geometry(channel, |rect| space.frame_of(rect).min);
}

/// Reserves the header's row in the body.
fn allocate_header_slot(ui: &mut Ui, geometry: &HeaderGeometry) -> Rect {
    let width = ui.available_width();
    ui.allocate_exact_size(vec2(width, geometry.header_height.max(0.0)), Sense::hover())
        .0
}

/// Draws the header bottom-aligned inside `slot_rect`.
///
/// Until measured, the header is laid out in an invisible sizing pass instead.
/// Returns true on the frame the measurement is captured.
fn header_slot(
    ui: &mut Ui,
    header: &mut HeaderFn<'_>,
    slot_rect: Rect,
    geometry: &HeaderGeometry,
    measurement: &mut Measurement,
) -> bool {
    let width = slot_rect.width();

    if !measurement.is_measured() {
        measurement.begin();
        let mut sizing_ui = ui.new_child(
            UiBuilder::new()
                .id_salt("parallax_header_sizing")
                .max_rect(Rect::from_min_size(slot_rect.min, vec2(width, f32::INFINITY)))
                .sizing_pass()
                .invisible(),
        );
        header(&mut sizing_ui);

        let mut measured_now = false;
        sizing_ui
            .interact(sizing_ui.min_rect(), sizing_ui.id().with("measure"), Sense::hover())
            .observe_geometry_once(measurement, |_| measured_now = true);
        return measured_now;
    }

    let height = measurement.height();
    let header_rect = Rect::from_min_size(
        pos2(slot_rect.left(), slot_rect.bottom() - height + geometry.header_offset),
        vec2(width, height),
    );
    let mut header_ui = ui.new_child(
        UiBuilder::new()
            .id_salt("parallax_header")
            .max_rect(header_rect),
    );
    header_ui.multiply_opacity(geometry.header_opacity());
    header(&mut header_ui);
    false
}

fn draw_background(
    ui: &mut Ui,
    background: &mut BackgroundFn<'_>,
    geometry: &HeaderGeometry,
    outer_rect: Rect,
) {
    let rect = Rect::from_min_size(
        outer_rect.min + vec2(0.0, geometry.background_offset),
        vec2(outer_rect.width(), geometry.background_height.max(0.0)),
    );
    let mut background_ui = ui.new_child(
        UiBuilder::new()
            .id_salt("parallax_background")
            .max_rect(rect)
            .sense(Sense::hover()),
    );
    background_ui.set_clip_rect(rect.intersect(outer_rect).intersect(ui.clip_rect()));
    background(&mut background_ui, geometry.is_collapsed);
}

/// Header copy pinned to the top of the container while collapsed.
fn draw_compact_header(
    ui: &mut Ui,
    header: &mut HeaderFn<'_>,
    measured_height: f32,
    outer_rect: Rect,
) {
    let rect = Rect::from_min_size(outer_rect.min, vec2(outer_rect.width(), measured_height));
    let mut overlay_ui = ui.new_child(
        UiBuilder::new()
            .id_salt("parallax_header_overlay")
            .max_rect(rect),
    );
    overlay_ui.set_clip_rect(outer_rect.intersect(ui.clip_rect()));
    header(&mut overlay_ui);
}
