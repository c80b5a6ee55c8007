//! Event emitter port for carousel events.
//!
//! Implementations handle transport details (channels, SSE, terminal
//! output). The engine only ever calls [`CarouselEventEmitter::emit`].

use tokio::sync::broadcast;
use tracing::trace;

use crate::events::CarouselEvent;

/// Broadcast channel capacity for carousel events.
const CHANNEL_CAPACITY: usize = 256;

/// Trait for emitting carousel events.
///
/// `emit` is called while the engine updates its state, so it must not
/// block and must not call back into the showcase.
pub trait CarouselEventEmitter: Send + Sync {
    /// Emit a carousel event.
    fn emit(&self, event: CarouselEvent);

    /// Clone this emitter into a boxed trait object.
    fn clone_box(&self) -> Box<dyn CarouselEventEmitter>;
}

/// A no-op event emitter for tests and headless contexts.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl CarouselEventEmitter for NoopEmitter {
    fn emit(&self, _event: CarouselEvent) {}

    fn clone_box(&self) -> Box<dyn CarouselEventEmitter> {
        Box::new(self.clone())
    }
}

/// Emitter that fans events out to any number of subscribers.
#[derive(Debug, Clone)]
pub struct ChannelEmitter {
    sender: broadcast::Sender<CarouselEvent>,
}

impl ChannelEmitter {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Subscribe to carousel events.
    pub fn subscribe(&self) -> broadcast::Receiver<CarouselEvent> {
        self.sender.subscribe()
    }

    /// Get number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChannelEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselEventEmitter for ChannelEmitter {
    fn emit(&self, event: CarouselEvent) {
        // Sending fails only when nobody listens.
        if self.sender.receiver_count() > 0 {
            trace!(event = event.event_name(), "Broadcasting carousel event");
            let _ = self.sender.send(event);
        }
    }

    fn clone_box(&self) -> Box<dyn CarouselEventEmitter> {
        Box::new(self.clone())
    }
}
