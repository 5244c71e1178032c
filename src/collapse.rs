//! Collapse-state output channel.
//!
//! The scroll view never writes into host-owned state. Instead it emits the
//! collapsed flag through a [`CollapseSink`], and the host drains the paired
//! [`CollapseSubscriber`] whenever it wants the current value.

use std::cell::Cell;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Creates a connected sink/subscriber pair.
///
/// The channel is unbounded: flags queue up until the subscriber is drained
/// (directly or through [`CollapseSubscriber::latest`]). The scroll view only
/// emits on its first frame and on changes, so an idle view adds nothing.
pub fn collapse_channel() -> (CollapseSink, CollapseSubscriber) {
    let (sender, receiver) = channel();
    (
        CollapseSink { sender },
        CollapseSubscriber {
            receiver,
            latest: Cell::new(None),
        },
    )
}

/// Sending half, attached to a [`crate::ParallaxHeader`].
#[derive(Debug, Clone)]
pub struct CollapseSink {
    sender: Sender<bool>,
}

impl CollapseSink {
    /// Emits a collapsed flag. A dropped subscriber is ignored.
    pub fn emit(&self, is_collapsed: bool) {
        let _ = self.sender.send(is_collapsed);
    }
}

/// Receiving half, owned by the host.
#[derive(Debug)]
pub struct CollapseSubscriber {
    receiver: Receiver<bool>,
    latest: Cell<Option<bool>>,
}

impl CollapseSubscriber {
    /// Drains pending notifications and returns them in emission order.
    pub fn drain(&self) -> Vec<bool> {
        let values: Vec<bool> = self.receiver.try_iter().collect();
        if let Some(&last) = values.last() {
            self.latest.set(Some(last));
        }
        values
    }

    /// Returns the most recent collapsed flag, or `None` before the first emission.
    pub fn latest(&self) -> Option<bool> {
        self.drain();
        self.latest.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_before_any_emission() {
        let (_sink, subscriber) = collapse_channel();
        assert_eq!(subscriber.latest(), None);
    }

    #[test]
    fn test_latest_tracks_last_value() {
        let (sink, subscriber) = collapse_channel();
        sink.emit(false);
        sink.emit(true);
        assert_eq!(subscriber.latest(), Some(true));

        // Nothing new: value is retained
        assert_eq!(subscriber.latest(), Some(true));
    }

    #[test]
    fn test_drain_preserves_order() {
        let (sink, subscriber) = collapse_channel();
        let cloned = sink.clone();
        sink.emit(true);
        cloned.emit(false);
        assert_eq!(subscriber.drain(), vec![true, false]);
        assert!(subscriber.drain().is_empty());
        assert_eq!(subscriber.latest(), Some(false));
    }

    #[test]
    fn test_undrained_values_queue_up() {
        let (sink, subscriber) = collapse_channel();
        for i in 0..100 {
            sink.emit(i % 2 == 0);
        }
        let values = subscriber.drain();
        assert_eq!(values.len(), 100);
        assert_eq!(values.last(), Some(&false));

        // `latest` drains too, leaving nothing queued
        sink.emit(true);
        assert_eq!(subscriber.latest(), Some(true));
        assert!(subscriber.drain().is_empty());
    }

    #[test]
    fn test_emit_after_subscriber_dropped() {
        let (sink, subscriber) = collapse_channel();
        drop(subscriber);
        sink.emit(true);
    }
}
