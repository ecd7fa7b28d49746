mod bus;

pub use bus::EventBus;

use crate::toolbar::NavigationButton;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolbarEvent {
    NavigationButtonAdded { button: NavigationButton },
    NavigationButtonRemoved { button: NavigationButton },
}

impl ToolbarEvent {
    pub fn button(&self) -> &NavigationButton {
        match self {
            ToolbarEvent::NavigationButtonAdded { button }
            | ToolbarEvent::NavigationButtonRemoved { button } => button,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, ToolbarEvent::NavigationButtonAdded { .. })
    }
}

/// Publish-only side of the event bus, all the registry needs.
pub trait EventSink: Send + Sync {
    fn post(&self, event: ToolbarEvent);
}
