pub mod geometry;
pub mod header;
pub mod collapse;
pub mod observe;
pub mod state;
pub mod scroll_view;
pub mod settings;

// Export the widget
pub use scroll_view::{ParallaxScrollView, ParallaxScrollOutput};
pub use header::{ParallaxHeader, HeaderFn, BackgroundFn};

// Export geometry and state
pub use geometry::HeaderGeometry;
pub use state::{Measurement, ScrollState};

// Export observation utilities
pub use observe::{CoordinateSpace, GeometryChannel, ObserveGeometry};

// Export collapse channel
pub use collapse::{collapse_channel, CollapseSink, CollapseSubscriber};

// Export settings
pub use settings::ParallaxSettings;
