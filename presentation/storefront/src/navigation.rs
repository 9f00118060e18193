use std::sync::Mutex;

/// Destination of a page transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    pub uri: String,
    pub force_load: bool,
}

pub trait Navigator: Send + Sync {
    fn navigate_to(&self, uri: &str, force_load: bool);
}

/// Navigator that records every transition in order.
#[derive(Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<NavigationEntry>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<NavigationEntry> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    pub fn history(&self) -> Vec<NavigationEntry> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate_to(&self, uri: &str, force_load: bool) {
        tracing::info!(uri, force_load, "Navigating");
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(NavigationEntry {
                uri: uri.to_string(),
                force_load,
            });
    }
}
