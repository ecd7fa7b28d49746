pub mod introspection;
pub mod panels;

pub use introspection::{CallStack, CallerIntrospection, FrameGuard};
pub use panels::PanelVisibility;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque plugin handle. Two handles refer to the same plugin iff their names match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginId(String);

impl PluginId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Handle derived from a Rust type, the equivalent of a plugin class token.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PluginId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The host side the registry consults when a plugin contributes a button.
pub trait PluginHost: Send + Sync {
    fn are_plugin_panels_hidden(&self, plugin: &PluginId) -> bool;
}
