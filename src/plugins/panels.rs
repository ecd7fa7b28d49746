use super::{PluginHost, PluginId};
use crate::toolbar::ButtonRegistry;
use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Host table of plugins whose panels are currently hidden.
#[derive(Debug, Default)]
pub struct PanelVisibility {
    hidden: RwLock<HashSet<PluginId>>,
}

impl PanelVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_hidden(plugins: impl IntoIterator<Item = PluginId>) -> Self {
        Self {
            hidden: RwLock::new(plugins.into_iter().collect()),
        }
    }

    pub fn is_hidden(&self, plugin: &PluginId) -> bool {
        self.read().contains(plugin)
    }

    pub fn hide(&self, plugin: PluginId) {
        self.write().insert(plugin);
    }

    pub fn show(&self, plugin: &PluginId) {
        self.write().remove(plugin);
    }

    // Poisoning is logged and ignored; no update leaves the set half-written.
    fn read(&self) -> RwLockReadGuard<'_, HashSet<PluginId>> {
        self.hidden.read().unwrap_or_else(|poisoned| {
            log::warn!("Panel visibility lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashSet<PluginId>> {
        self.hidden.write().unwrap_or_else(|poisoned| {
            log::warn!("Panel visibility lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Flips the plugin's panel state and toggles its button group to match.
    /// Returns whether the plugin's panels are hidden afterwards.
    pub fn toggle_plugin_panels(&self, plugin: &PluginId, registry: &mut ButtonRegistry) -> bool {
        let now_hidden = !self.is_hidden(plugin);
        if now_hidden {
            self.hide(plugin.clone());
        } else {
            self.show(plugin);
        }

        let toggled = registry.toggle_panel_group(Some(plugin));
        log::info!(
            "Panels for plugin {} are now {} ({} button(s) toggled)",
            plugin,
            if now_hidden { "hidden" } else { "shown" },
            toggled
        );
        now_hidden
    }
}

impl PluginHost for PanelVisibility {
    fn are_plugin_panels_hidden(&self, plugin: &PluginId) -> bool {
        self.is_hidden(plugin)
    }
}
