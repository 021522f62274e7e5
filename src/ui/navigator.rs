//! Browsing-context location

use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

/// Moves the browsing context to another page.
pub trait Navigator: Send {
    fn assign(&mut self, target: &str);
}

/// Navigator that records the location it was sent to.
///
/// Clones share the same location, so a caller can keep one handle and
/// read where the page went after the controller navigated.
#[derive(Debug, Clone, Default)]
pub struct LocationNavigator {
    history: Arc<Mutex<Vec<String>>>,
}

impl LocationNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current location, `None` while still on the landing page.
    pub fn location(&self) -> Option<String> {
        self.history().last().cloned()
    }

    /// Every navigation made, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for LocationNavigator {
    fn assign(&mut self, target: &str) {
        info!(page = target, "navigating");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(target.to_string());
    }
}
