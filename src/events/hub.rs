use crate::chart::Severity;
use serde::Serialize;
use tokio::sync::broadcast;

/// Notifications emitted by chart widgets.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum Event {
    /// A chart received new data and was reclassified.
    ChartUpdated { chart: String, percentage_used: u32, severity: Severity },

    /// The load-in animation flag of a chart went back to false.
    AnimationSettled { chart: String },
}

impl Event {
    /// Returns the event type name for this event variant.
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::ChartUpdated { .. } => "chart_updated",
            Self::AnimationSettled { .. } => "animation_settled",
        }
    }
}

/// The central event broadcast hub.
///
/// Widgets send events here via `publish()`. The embedder subscribes via
/// `subscribe()` to log or react to chart changes.
#[derive(Debug, Clone)]
pub struct EventHub {
    sender: broadcast::Sender<Event>,
}

impl EventHub {
    /// Create a new EventHub with the given channel capacity.
    ///
    /// Subscribers that fall more than `capacity` events behind receive a
    /// `Lagged` error and miss intermediate events.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Returns Ok(subscriber_count) or Err if there are no active subscribers
    /// (events are fire-and-forget, callers ignore it).
    pub fn publish(&self, event: Event) -> Result<usize, broadcast::error::SendError<Event>> {
        self.sender.send(event)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}
