use tokio::sync::broadcast;

use super::{EventSink, ToolbarEvent};

const CHANNEL_CAPACITY: usize = 256;

pub struct EventBus {
    tx: broadcast::Sender<ToolbarEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn send(&self, event: ToolbarEvent) {
        if self.tx.send(event).is_err() {
            log::trace!("Toolbar event dropped, no subscribers");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ToolbarEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for EventBus {
    fn post(&self, event: ToolbarEvent) {
        self.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolbar::NavigationButton;
    use std::sync::Arc;

    fn added(tooltip: &str) -> ToolbarEvent {
        ToolbarEvent::NavigationButtonAdded { button: NavigationButton::new(tooltip) }
    }

    #[tokio::test]
    async fn single_subscriber_receives_event() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.post(added("XP"));

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, ToolbarEvent::NavigationButtonAdded { .. }));
        assert_eq!(event.button().tooltip(), "XP");
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let bus = EventBus::new();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();
        let mut rx3 = bus.subscribe();

        bus.post(added("XP"));

        for rx in [&mut rx1, &mut rx2, &mut rx3] {
            let event = rx.recv().await.unwrap();
            assert_eq!(event.button().tooltip(), "XP");
        }
    }

    #[tokio::test]
    async fn late_subscriber_misses_earlier_events() {
        let bus = EventBus::new();

        bus.post(added("early"));

        let mut rx = bus.subscribe();
        bus.post(added("late"));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.button().tooltip(), "late");
    }

    #[tokio::test]
    async fn subscribers_receive_events_in_order() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.post(added("XP"));
        bus.post(ToolbarEvent::NavigationButtonRemoved { button: NavigationButton::new("XP") });

        assert!(rx.recv().await.unwrap().is_added());
        assert!(!rx.recv().await.unwrap().is_added());
    }

    #[tokio::test]
    async fn posting_through_sink_reaches_subscribers() {
        // Arrange
        let bus = Arc::new(EventBus::new());
        let mut rx = bus.subscribe();
        let sink: Arc<dyn EventSink> = bus.clone();

        // Act
        sink.post(added("XP"));
        drop(sink);
        drop(bus);

        // Assert
        assert_eq!(rx.recv().await.unwrap().button().tooltip(), "XP");
        assert!(matches!(rx.recv().await, Err(broadcast::error::RecvError::Closed)));
    }

    #[tokio::test]
    async fn slow_subscriber_reports_skipped_events() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        for i in 0..CHANNEL_CAPACITY + 10 {
            bus.post(added(&format!("B{}", i)));
        }

        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Lagged(10))
        ));
        assert_eq!(rx.recv().await.unwrap().button().tooltip(), "B10");
    }

    #[test]
    fn send_without_subscribers_does_not_panic() {
        let bus = EventBus::new();
        bus.post(added("XP"));
    }
}
