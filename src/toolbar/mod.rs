pub mod button;
pub mod registry;
pub mod view;

pub use button::{ButtonKey, NavigationButton};
pub use registry::{ButtonRegistry, PluginToolbar};
pub use view::ToolbarView;
