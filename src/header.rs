//! Parallax header descriptor.

use crate::collapse::CollapseSink;
use egui::Ui;

/// Header view builder, called each frame the header is drawn.
pub type HeaderFn<'a> = Box<dyn FnMut(&mut Ui) + 'a>;

/// Background view builder, receiving the current collapsed flag.
pub type BackgroundFn<'a> = Box<dyn FnMut(&mut Ui, bool) + 'a>;

/// The header model passed to a [`crate::ParallaxScrollView`].
///
/// No validation happens here: an `expanded_height` smaller than the header's
/// natural height yields a header that never visibly expands.
pub struct ParallaxHeader<'a> {
    pub(crate) expanded_height: Option<f32>,
    pub(crate) header: HeaderFn<'a>,
    pub(crate) background: BackgroundFn<'a>,
    pub(crate) collapse_sink: Option<CollapseSink>,
}

impl<'a> ParallaxHeader<'a> {
    /// Creates a header whose background reacts to the collapsed flag (e.g. to dim itself).
    ///
    /// # Arguments
    /// * `expanded_height` - Resting height of the header; `None` uses the header's
    ///   natural height, producing a header that is always collapsed
    /// * `header` - The header view. Its natural height is the collapsed size, and it
    ///   handles input normally
    /// * `background` - The background view, sized by `expanded_height` and shrinking
    ///   down to the collapsed size while scrolling. It is meant to be decorative:
    ///   while collapsed it is drawn above the body, so any widget in it that senses
    ///   clicks or drags takes that input away from the content underneath. Paint
    ///   through `ui.painter()` or use hover-only widgets
    pub fn new(
        expanded_height: Option<f32>,
        header: impl FnMut(&mut Ui) + 'a,
        background: impl FnMut(&mut Ui, bool) + 'a,
    ) -> Self {
        Self {
            expanded_height,
            header: Box::new(header),
            background: Box::new(background),
            collapse_sink: None,
        }
    }

    /// Creates a header whose background ignores the collapsed flag.
    pub fn with_static_background(
        expanded_height: Option<f32>,
        header: impl FnMut(&mut Ui) + 'a,
        mut background: impl FnMut(&mut Ui) + 'a,
    ) -> Self {
        Self::new(expanded_height, header, move |ui, _| background(ui))
    }

    /// Attaches an output channel that receives the collapsed flag on every change.
    pub fn collapse_sink(mut self, sink: CollapseSink) -> Self {
        self.collapse_sink = Some(sink);
        self
    }

    /// Returns the configured resting height.
    pub fn expanded_height(&self) -> Option<f32> {
        self.expanded_height
    }
}

impl std::fmt::Debug for ParallaxHeader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallaxHeader")
            .field("expanded_height", &self.expanded_height)
            .field("collapse_sink", &self.collapse_sink.is_some())
            .finish_non_exhaustive()
    }
}
