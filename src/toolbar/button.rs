use crate::plugins::PluginId;
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// The fields that decide whether two buttons are the same button.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ButtonKey {
    tooltip: String,
    icon: Option<String>,
    panel: Option<String>,
    tab: bool,
    priority: i32,
}

/// A toolbar entry contributed by a plugin.
///
/// Equality and hashing only look at the [`ButtonKey`]; `owning_plugin` and `hidden`
/// are runtime state managed by the registry and do not affect identity.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationButton {
    #[serde(flatten)]
    key: ButtonKey,
    owning_plugin: Option<PluginId>,
    hidden: bool,
}

impl NavigationButton {
    pub fn new(tooltip: impl Into<String>) -> Self {
        Self {
            key: ButtonKey {
                tooltip: tooltip.into(),
                icon: None,
                panel: None,
                tab: true,
                priority: 0,
            },
            owning_plugin: None,
            hidden: false,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.key.icon = Some(icon.into());
        self
    }

    pub fn with_panel(mut self, panel: impl Into<String>) -> Self {
        self.key.panel = Some(panel.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.key.priority = priority;
        self
    }

    /// Whether clicking the button opens a side panel tab rather than running an action.
    pub fn with_tab(mut self, tab: bool) -> Self {
        self.key.tab = tab;
        self
    }

    pub fn key(&self) -> &ButtonKey {
        &self.key
    }

    pub fn tooltip(&self) -> &str {
        &self.key.tooltip
    }

    pub fn icon(&self) -> Option<&str> {
        self.key.icon.as_deref()
    }

    pub fn panel(&self) -> Option<&str> {
        self.key.panel.as_deref()
    }

    pub fn is_tab(&self) -> bool {
        self.key.tab
    }

    pub fn priority(&self) -> i32 {
        self.key.priority
    }

    pub fn owning_plugin(&self) -> Option<&PluginId> {
        self.owning_plugin.as_ref()
    }

    pub fn set_owning_plugin(&mut self, plugin: Option<PluginId>) {
        self.owning_plugin = plugin;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn is_owned_by(&self, plugin: &PluginId) -> bool {
        self.owning_plugin.as_ref() == Some(plugin)
    }
}

impl PartialEq for NavigationButton {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for NavigationButton {}

impl Hash for NavigationButton {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}
