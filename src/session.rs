use crate::config::{SessionConfig, Step};
use crate::events::EventBus;
use crate::plugins::{PanelVisibility, PluginId};
use crate::toolbar::{ButtonRegistry, ToolbarView};
use anyhow::Result;
use std::sync::Arc;

/// Replays the session's steps against `registry`. Toggles go through `panels` so the
/// host's hidden table follows the button group.
///
/// Returns the number of steps applied. Stops at the first step naming an unknown button.
pub fn replay(
    config: &SessionConfig,
    registry: &mut ButtonRegistry,
    panels: &PanelVisibility,
) -> Result<usize> {
    for (idx, step) in config.steps.iter().enumerate() {
        log::debug!("Step {}: {:?}", idx + 1, step);
        match step {
            Step::Add { button, plugin } => {
                let entry = config.button_entry(button)?;
                let owner = plugin.as_deref().map(PluginId::new).or_else(|| entry.plugin());
                registry.add_navigation(entry.to_button(), owner);
            }
            Step::Remove { button } => {
                let entry = config.button_entry(button)?;
                registry.remove_navigation(&entry.to_button());
            }
            Step::Toggle { plugin } => {
                panels.toggle_plugin_panels(&PluginId::new(plugin.as_str()), registry);
            }
        }
    }

    log::info!("Replayed {} step(s)", config.steps.len());
    Ok(config.steps.len())
}

/// Replays `config` on a fresh registry and returns the toolbar a bus subscriber ends up
/// showing. If the view fell behind the bus it is rebuilt from the registry's final state.
pub async fn render(config: &SessionConfig) -> Result<ToolbarView> {
    let bus = Arc::new(EventBus::new());
    let view = tokio::spawn(ToolbarView::new().run(bus.subscribe()));

    let panels = Arc::new(PanelVisibility::from_hidden(config.hidden_plugins()));
    let mut registry = ButtonRegistry::new(bus.clone(), panels.clone());

    replay(config, &mut registry, &panels)?;
    log::info!("{} navigation button(s) registered", registry.len());
    let snapshot = registry.navigation_buttons();

    // Closing the bus lets the view drain and finish.
    drop(registry);
    drop(bus);
    let mut view = view.await?;

    if view.is_stale() {
        log::warn!("Toolbar view missed events, rebuilding from registry");
        view.resync(snapshot);
    }
    Ok(view)
}
