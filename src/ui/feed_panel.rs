//! Feed panel UI rendering
//!
//! Hosts the parallax scroll view: a cover background, a title header, and the
//! generated feed rows as the scroll body.

use crate::app::AppState;
use crate::io::FeedRow;
use egui::ecolor::Hsva;
use egui::{Color32, RichText, Sense, Ui};
use parallax_scroll::{ParallaxHeader, ParallaxScrollView};

const ROW_HEIGHT: f32 = 56.0;

/// Result of feed panel interactions.
pub enum FeedInteraction {
    /// A feed row was clicked
    RowClicked(usize),
}

/// Renders the parallax feed into the remaining space of `ui`.
///
/// # Returns
/// * The row click, if any
pub fn render_feed_panel(ui: &mut Ui, state: &mut AppState) -> Option<FeedInteraction> {
    let mut interaction = None;
    let mut notifications = 0;

    let expanded_height = state.settings.expanded_height;
    let sink = state.collapse_sink();
    let row_count = state.rows.len();

    let mut view = ParallaxScrollView::new(|| {
        ParallaxHeader::new(
            expanded_height,
            |ui: &mut Ui| render_title(ui, row_count),
            render_cover,
        )
        .collapse_sink(sink)
    })
    .id_salt("demo_feed")
    .shows_indicators(state.settings.shows_indicators)
    .on_collapse_change(|collapsed| {
        log::info!("Header {}", if collapsed { "collapsed" } else { "expanded" });
        notifications += 1;
    });

    if let Some(offset) = state.pending_scroll.take() {
        view = view.scroll_to(offset);
    }

    let rows = &state.rows;
    view.show(ui, |ui| {
        for (index, row) in rows.iter().enumerate() {
            if render_row(ui, row).clicked() {
                interaction = Some(FeedInteraction::RowClicked(index));
            }
        }
    });

    state.collapse_notifications += notifications;
    interaction
}

/// Header: the part that stays visible as a compact bar when collapsed.
fn render_title(ui: &mut Ui, row_count: usize) {
    egui::Frame::default()
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Nearby places").heading().strong().color(Color32::WHITE));
            ui.label(RichText::new(format!("{} results", row_count)).color(Color32::from_gray(220)));
        });
}

/// Background: a gradient cover, dimmed while collapsed.
fn render_cover(ui: &mut Ui, collapsed: bool) {
    let rect = ui.max_rect();
    let painter = ui.painter();

    let top = Color32::from_rgb(40, 90, 160);
    let bottom = Color32::from_rgb(120, 60, 150);
    let steps = 24;
    for i in 0..steps {
        let t = i as f32 / steps as f32;
        let band = egui::Rect::from_min_max(
            egui::pos2(rect.left(), rect.top() + rect.height() * t),
            egui::pos2(rect.right(), rect.top() + rect.height() * (t + 1.0 / steps as f32)),
        );
        painter.rect_filled(band, 0.0, top.lerp_to_gamma(bottom, t));
    }

    if collapsed {
        painter.rect_filled(rect, 0.0, Color32::from_black_alpha(90));
    }
}

fn render_row(ui: &mut Ui, row: &FeedRow) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), ROW_HEIGHT),
        Sense::click(),
    );

    let painter = ui.painter();
    if response.hovered() {
        painter.rect_filled(rect, 0.0, ui.visuals().widgets.hovered.bg_fill);
    }

    let accent = Color32::from(Hsva::new(row.hue, 0.55, 0.85, 1.0));
    let swatch = egui::Rect::from_center_size(
        egui::pos2(rect.left() + 28.0, rect.center().y),
        egui::vec2(32.0, 32.0),
    );
    painter.rect_filled(swatch, 6.0, accent);

    let text_color = ui.visuals().text_color();
    painter.text(
        egui::pos2(swatch.right() + 12.0, rect.top() + 10.0),
        egui::Align2::LEFT_TOP,
        &row.title,
        egui::FontId::proportional(15.0),
        text_color,
    );
    painter.text(
        egui::pos2(swatch.right() + 12.0, rect.top() + 30.0),
        egui::Align2::LEFT_TOP,
        &row.detail,
        egui::FontId::proportional(12.0),
        ui.visuals().weak_text_color(),
    );

    response
}
