use super::{ButtonKey, NavigationButton};
use crate::events::{EventSink, ToolbarEvent};
use crate::plugins::{CallerIntrospection, PluginHost, PluginId};
use std::collections::HashMap;
use std::sync::Arc;

/// Holds the navigation buttons contributed by plugins.
///
/// Membership changes are announced on the event sink instead of touching the toolbar
/// directly. A button is stored at most once, keyed by its identity fields.
pub struct ButtonRegistry {
    events: Arc<dyn EventSink>,
    host: Arc<dyn PluginHost>,
    buttons: HashMap<ButtonKey, NavigationButton>,
}

impl ButtonRegistry {
    pub fn new(events: Arc<dyn EventSink>, host: Arc<dyn PluginHost>) -> Self {
        Self {
            events,
            host,
            buttons: HashMap::new(),
        }
    }

    /// Adds `button` attributed to `plugin`.
    ///
    /// Re-adding a button that is already present only reassigns its owner. A new button
    /// whose owner has hidden panels is not announced and is stored with `hidden = true`
    /// rather than visible, so the group toggle that shows the panels emits its `Added`.
    /// Otherwise the incoming `hidden` flag is kept as is.
    pub fn add_navigation(&mut self, mut button: NavigationButton, plugin: Option<PluginId>) {
        button.set_owning_plugin(plugin);

        if let Some(existing) = self.buttons.get_mut(button.key()) {
            log::debug!(
                "Navigation button {:?} already present, owner now {:?}",
                existing.tooltip(),
                button.owning_plugin().map(PluginId::name)
            );
            existing.set_owning_plugin(button.owning_plugin().cloned());
            return;
        }

        let suppressed = button
            .owning_plugin()
            .is_some_and(|plugin| self.host.are_plugin_panels_hidden(plugin));
        if suppressed {
            button.set_hidden(true);
            self.buttons.insert(button.key().clone(), button.clone());
            log::debug!(
                "Panels hidden for {:?}, not announcing {:?}",
                button.owning_plugin().map(PluginId::name),
                button.tooltip()
            );
            return;
        }

        self.buttons.insert(button.key().clone(), button.clone());
        self.events.post(ToolbarEvent::NavigationButtonAdded { button });
    }

    /// Adds `button` attributed to whichever plugin `introspection` reports as the caller.
    ///
    /// Prefer [`ButtonRegistry::add_navigation`] or [`ButtonRegistry::scoped`].
    pub fn add_navigation_inferred(
        &mut self,
        button: NavigationButton,
        introspection: &dyn CallerIntrospection,
    ) {
        let plugin = introspection.calling_plugin();
        if plugin.is_none() {
            log::debug!("No plugin frame found for {:?}, adding unowned", button.tooltip());
        }
        self.add_navigation(button, plugin);
    }

    pub fn remove_navigation(&mut self, button: &NavigationButton) {
        match self.buttons.remove(button.key()) {
            Some(removed) => {
                self.events.post(ToolbarEvent::NavigationButtonRemoved { button: removed });
            }
            None => log::debug!("Navigation button {:?} not present", button.tooltip()),
        }
    }

    /// Snapshot of all current buttons, in no particular order.
    pub fn navigation_buttons(&self) -> Vec<NavigationButton> {
        self.buttons.values().cloned().collect()
    }

    pub fn get(&self, key: &ButtonKey) -> Option<&NavigationButton> {
        self.buttons.get(key)
    }

    pub fn contains(&self, button: &NavigationButton) -> bool {
        self.buttons.contains_key(button.key())
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Flips `hidden` on every button owned by `owning_plugin` and announces each one:
    /// removed when it became hidden, added when it became visible. Buttons stay members.
    ///
    /// Returns the number of buttons toggled.
    pub fn toggle_panel_group(&mut self, owning_plugin: Option<&PluginId>) -> usize {
        let Some(plugin) = owning_plugin else { return 0 };

        let mut toggled = 0;
        for button in self.buttons.values_mut().filter(|b| b.is_owned_by(plugin)) {
            button.set_hidden(!button.is_hidden());
            let button = button.clone();
            let event = if button.is_hidden() {
                ToolbarEvent::NavigationButtonRemoved { button }
            } else {
                ToolbarEvent::NavigationButtonAdded { button }
            };
            self.events.post(event);
            toggled += 1;
        }

        log::debug!("Toggled {} button(s) for plugin {}", toggled, plugin);
        toggled
    }

    /// A view of the registry that attributes everything it adds to `plugin`.
    pub fn scoped(&mut self, plugin: PluginId) -> PluginToolbar<'_> {
        PluginToolbar { registry: self, plugin }
    }
}

/// Per-plugin facade over [`ButtonRegistry`].
pub struct PluginToolbar<'a> {
    registry: &'a mut ButtonRegistry,
    plugin: PluginId,
}

impl PluginToolbar<'_> {
    pub fn add_navigation(&mut self, button: NavigationButton) {
        self.registry.add_navigation(button, Some(self.plugin.clone()));
    }

    /// Removes `button` only if it belongs to this plugin.
    pub fn remove_navigation(&mut self, button: &NavigationButton) {
        let owned = self
            .registry
            .get(button.key())
            .is_some_and(|stored| stored.is_owned_by(&self.plugin));
        if !owned {
            log::debug!(
                "Plugin {} does not own {:?}, not removing",
                self.plugin,
                button.tooltip()
            );
            return;
        }
        self.registry.remove_navigation(button);
    }

    pub fn toggle(&mut self) -> usize {
        self.registry.toggle_panel_group(Some(&self.plugin))
    }

    pub fn buttons(&self) -> Vec<NavigationButton> {
        self.registry
            .buttons
            .values()
            .filter(|b| b.is_owned_by(&self.plugin))
            .cloned()
            .collect()
    }
}
