//! Geometry observation for child widgets.
//!
//! Lets a widget deep inside a container report where it ended up without the
//! container measuring it up front:
//! - [`CoordinateSpace`] names a frame of reference established by a container
//! - [`GeometryChannel`] carries a value from descendants up to the container,
//!   scoped to a single container instance
//! - [`ObserveGeometry`] hooks both onto any [`egui::Response`]

use crate::state::Measurement;
use egui::{Context, Id, Pos2, Rect, Response};
use std::marker::PhantomData;

/// A named coordinate space whose origin is a point on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateSpace {
    name: Id,
    origin: Pos2,
}

impl CoordinateSpace {
    /// Establishes (or moves) the space `name` with its origin at `origin`.
    pub fn establish(ctx: &Context, name: Id, origin: Pos2) -> Self {
        let space = Self { name, origin };
        ctx.data_mut(|d| d.insert_temp(name, space));
        space
    }

    /// Looks up a space established earlier.
    pub fn named(ctx: &Context, name: Id) -> Option<Self> {
        ctx.data_mut(|d| d.get_temp::<Self>(name))
    }

    /// Returns the space's name.
    pub fn name(&self) -> Id {
        self.name
    }

    /// Returns the space's origin in screen coordinates.
    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    /// Expresses a screen rect in this space.
    pub fn frame_of(&self, rect: Rect) -> Rect {
        rect.translate(-self.origin.to_vec2())
    }
}

/// Slot stored in egui memory for a channel.
#[derive(Debug, Clone)]
struct ChannelSlot<T> {
    value: T,
    changed: bool,
}

/// A value channel from descendants to one container instance.
///
/// Children [`publish`](Self::publish) into it while the container lays them
/// out; the container then [`take_changed`](Self::take_changed) to react only
/// when the value actually moved.
pub struct GeometryChannel<T> {
    id: Id,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for GeometryChannel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GeometryChannel<T> {}

impl<T> std::fmt::Debug for GeometryChannel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeometryChannel").field("id", &self.id).finish()
    }
}

impl<T> GeometryChannel<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Creates the channel `key` scoped to the container `scope`.
    pub fn scoped(scope: Id, key: &str) -> Self {
        Self {
            id: scope.with(("geometry_channel", key)),
            _marker: PhantomData,
        }
    }

    /// Returns the memory id backing this channel.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Publishes a value. Only a value different from the current one marks the channel changed.
    pub fn publish(&self, ctx: &Context, value: T) {
        ctx.data_mut(|d| {
            let slot = d.get_temp_mut_or_insert_with(self.id, || ChannelSlot {
                value: value.clone(),
                changed: true,
            });
            if slot.value != value {
                slot.value = value;
                slot.changed = true;
            }
        });
    }

    /// Returns the latest published value without consuming the change.
    pub fn latest(&self, ctx: &Context) -> Option<T> {
        ctx.data_mut(|d| d.get_temp::<ChannelSlot<T>>(self.id).map(|slot| slot.value))
    }

    /// Returns the value if it changed since the last call, consuming the change.
    pub fn take_changed(&self, ctx: &Context) -> Option<T> {
        ctx.data_mut(|d| {
            let slot = d.get_temp::<ChannelSlot<T>>(self.id).filter(|slot| slot.changed)?;
            d.insert_temp(
                self.id,
                ChannelSlot {
                    value: slot.value.clone(),
                    changed: false,
                },
            );
            Some(slot.value)
        })
    }
}

/// Geometry observation hooks for laid-out widgets.
pub trait ObserveGeometry: Sized {
    /// Reports the widget's rect to `observe` exactly once, the first time it is laid out.
    ///
    /// `measurement` remembers that the report happened; it captures the rect's height.
    fn observe_geometry_once(self, measurement: &mut Measurement, observe: impl FnOnce(Rect)) -> Self;

    /// Publishes a value derived from the widget's rect into `channel` (every frame).
    fn publish_geometry<T>(self, channel: &GeometryChannel<T>, map: impl FnOnce(Rect) -> T) -> Self
    where
        T: Clone + PartialEq + Send + Sync + 'static;
}

impl ObserveGeometry for Response {
    fn observe_geometry_once(self, measurement: &mut Measurement, observe: impl FnOnce(Rect)) -> Self {
        if measurement.complete(self.rect.height().max(0.0)) {
            observe(self.rect);
        }
        self
    }

    fn publish_geometry<T>(self, channel: &GeometryChannel<T>, map: impl FnOnce(Rect) -> T) -> Self
    where
        T: Clone + PartialEq + Send + Sync + 'static,
    {
        channel.publish(&self.ctx, map(self.rect));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_coordinate_space_translates_rects() {
        let ctx = Context::default();
        let name = Id::new("space");
        CoordinateSpace::establish(&ctx, name, pos2(10.0, 100.0));

        let space = CoordinateSpace::named(&ctx, name).unwrap();
        let local = space.frame_of(Rect::from_min_size(pos2(10.0, 60.0), vec2(50.0, 0.0)));
        assert_eq!(local.min, pos2(0.0, -40.0));
    }

    #[test]
    fn test_channel_reports_only_changes() {
        let ctx = Context::default();
        let channel = GeometryChannel::<f32>::scoped(Id::new("view"), "offset");

        assert_eq!(channel.take_changed(&ctx), None);

        channel.publish(&ctx, -10.0);
        assert_eq!(channel.take_changed(&ctx), Some(-10.0));
        assert_eq!(channel.take_changed(&ctx), None);

        // Same value again is not a change
        channel.publish(&ctx, -10.0);
        assert_eq!(channel.take_changed(&ctx), None);
        assert_eq!(channel.latest(&ctx), Some(-10.0));

        channel.publish(&ctx, -20.0);
        assert_eq!(channel.take_changed(&ctx), Some(-20.0));
    }

    #[test]
    fn test_channels_are_scoped_per_instance() {
        let ctx = Context::default();
        let first = GeometryChannel::<f32>::scoped(Id::new("first"), "offset");
        let second = GeometryChannel::<f32>::scoped(Id::new("second"), "offset");

        first.publish(&ctx, 5.0);
        assert_eq!(second.latest(&ctx), None);
        assert_eq!(second.take_changed(&ctx), None);
        assert_eq!(first.take_changed(&ctx), Some(5.0));
    }
}
