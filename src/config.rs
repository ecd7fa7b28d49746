use crate::paths;
use crate::plugins::PluginId;
use crate::toolbar::NavigationButton;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A toolbar session: the plugins involved, the buttons they contribute and the
/// operations to replay against the registry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub plugins: Vec<PluginEntry>,
    #[serde(default)]
    pub buttons: Vec<ButtonEntry>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PluginEntry {
    pub id: String,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ButtonEntry {
    pub tooltip: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub panel: Option<String>,
    #[serde(default = "default_tab")]
    pub tab: bool,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub plugin: Option<String>,
}

fn default_tab() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Step {
    Add {
        button: String,
        /// Overrides the button's configured plugin for this add.
        #[serde(default)]
        plugin: Option<String>,
    },
    Remove {
        button: String,
    },
    Toggle {
        plugin: String,
    },
}

impl SessionConfig {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid session file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file {:?}", path))?;
        Self::parse(&content)
    }

    /// Loads the session from the config directory, or an empty one if there is none.
    pub fn load_default() -> Result<Self> {
        let path = paths::session_path()?;
        if !path.exists() {
            log::info!("No session file at {:?}, starting empty", path);
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn hidden_plugins(&self) -> impl Iterator<Item = PluginId> + '_ {
        self.plugins
            .iter()
            .filter(|p| p.hidden)
            .map(|p| PluginId::new(p.id.as_str()))
    }

    pub fn button_entry(&self, tooltip: &str) -> Result<&ButtonEntry> {
        self.buttons
            .iter()
            .find(|b| b.tooltip == tooltip)
            .ok_or_else(|| anyhow::anyhow!("Unknown button: {}", tooltip))
    }
}

impl ButtonEntry {
    pub fn to_button(&self) -> NavigationButton {
        let mut button = NavigationButton::new(self.tooltip.as_str())
            .with_priority(self.priority)
            .with_tab(self.tab);
        if let Some(icon) = &self.icon {
            button = button.with_icon(icon.as_str());
        }
        if let Some(panel) = &self.panel {
            button = button.with_panel(panel.as_str());
        }
        button
    }

    pub fn plugin(&self) -> Option<PluginId> {
        self.plugin.as_deref().map(PluginId::new)
    }
}
