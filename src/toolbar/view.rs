use super::NavigationButton;
use crate::events::ToolbarEvent;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

/// Headless toolbar model: the buttons a toolbar would currently display.
#[derive(Debug, Default)]
pub struct ToolbarView {
    buttons: Vec<NavigationButton>,
    stale: bool,
}

impl ToolbarView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &ToolbarEvent) {
        match event {
            ToolbarEvent::NavigationButtonAdded { button } => {
                self.remove(button);
                let order = (button.priority(), button.tooltip());
                let at = self
                    .buttons
                    .partition_point(|b| (b.priority(), b.tooltip()) <= order);
                self.buttons.insert(at, button.clone());
            }
            ToolbarEvent::NavigationButtonRemoved { button } => self.remove(button),
        }
    }

    fn remove(&mut self, button: &NavigationButton) {
        if let Some(idx) = self.buttons.iter().position(|b| b == button) {
            self.buttons.remove(idx);
        }
    }

    /// Visible buttons ordered by priority, then tooltip.
    pub fn visible(&self) -> &[NavigationButton] {
        &self.buttons
    }

    /// Whether events were skipped since the last [`ToolbarView::resync`].
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Rebuilds the view from a registry snapshot, keeping the buttons that are not hidden.
    pub fn resync(&mut self, buttons: impl IntoIterator<Item = NavigationButton>) {
        self.buttons = buttons.into_iter().filter(|b| !b.is_hidden()).collect();
        self.buttons.sort_by(|a, b| {
            a.priority()
                .cmp(&b.priority())
                .then_with(|| a.tooltip().cmp(b.tooltip()))
        });
        self.stale = false;
    }

    /// Applies events until every sender is gone, then hands the view back.
    /// A lagged receiver marks the view stale instead of failing.
    pub async fn run(mut self, mut rx: broadcast::Receiver<ToolbarEvent>) -> Self {
        loop {
            match rx.recv().await {
                Ok(event) => self.apply(&event),
                Err(RecvError::Lagged(skipped)) => {
                    log::warn!("Toolbar view lagged, {} event(s) skipped", skipped);
                    self.stale = true;
                }
                Err(RecvError::Closed) => break,
            }
        }
        self
    }
}
