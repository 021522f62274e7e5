//! Checklist state kept in the durable store

use std::collections::BTreeMap;

use tracing::warn;

use crate::storage::{KeyValueStore, StorageError};

/// Durable-store key holding every checkbox state of the guide
pub const CHECKLIST_KEY: &str = "resistance-guide-checklist";

/// Identifier of the checkbox at `index` in document order
pub fn checkbox_id(index: usize) -> String {
    format!("checkbox-{}", index)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    states: BTreeMap<String, bool>,
}

impl Checklist {
    /// Read the saved checklist. Anything unreadable restores as unchecked.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let raw = match store.get(CHECKLIST_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                warn!(error = %e, key = CHECKLIST_KEY, "checklist store unreadable");
                return Self::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(states) => Self { states },
            Err(e) => {
                warn!(error = %e, key = CHECKLIST_KEY, "discarding malformed checklist");
                Self::default()
            }
        }
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.states.get(&checkbox_id(index)).copied().unwrap_or(false)
    }

    /// Checked state of the first `count` checkboxes on the page.
    pub fn restore(&self, count: usize) -> Vec<bool> {
        (0..count).map(|index| self.is_checked(index)).collect()
    }

    /// Record a toggle and write the whole checklist back.
    pub fn toggle(&mut self, store: &dyn KeyValueStore, index: usize, checked: bool) {
        self.states.insert(checkbox_id(index), checked);
        let saved = serde_json::to_string(&self.states)
            .map_err(StorageError::from)
            .and_then(|json| store.set(CHECKLIST_KEY, &json));
        if let Err(e) = saved {
            warn!(error = %e, key = CHECKLIST_KEY, index, "could not save checklist");
        }
    }
}
