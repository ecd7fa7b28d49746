pub mod config;
pub mod events;
pub mod paths;
pub mod plugins;
pub mod session;
pub mod toolbar;

pub use events::{EventBus, EventSink, ToolbarEvent};
pub use plugins::{CallStack, CallerIntrospection, PanelVisibility, PluginHost, PluginId};
pub use toolbar::{ButtonKey, ButtonRegistry, NavigationButton, PluginToolbar, ToolbarView};
