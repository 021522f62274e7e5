use tracing::warn;

use super::KeyValueStore;
use crate::ui::language::LanguageCode;

/// Session key recording that detection already ran in this browsing session
pub const SESSION_FLAG_KEY: &str = "languageDetectionDone";
/// Session key holding the resolved or chosen language
pub const PREFERRED_LANGUAGE_KEY: &str = "preferredLanguage";

/// Typed view of the session store used by the redirect controller.
///
/// Persistence only lets later pages skip detection, so every failure is
/// logged and swallowed: a failed read counts as "not set" and a failed
/// write leaves the in-memory state as the only record.
pub struct SessionFlags {
    store: Box<dyn KeyValueStore>,
}

impl SessionFlags {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub fn detection_done(&self) -> bool {
        match self.store.get(SESSION_FLAG_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!(error = %e, key = SESSION_FLAG_KEY, "session store unreadable, treating flag as unset");
                false
            }
        }
    }

    pub fn mark_detection_done(&self) {
        if let Err(e) = self.store.set(SESSION_FLAG_KEY, "true") {
            warn!(error = %e, key = SESSION_FLAG_KEY, "could not persist session flag");
        }
    }

    pub fn preferred_language(&self) -> Option<LanguageCode> {
        match self.store.get(PREFERRED_LANGUAGE_KEY) {
            Ok(value) => value.and_then(|code| LanguageCode::from_code(&code)),
            Err(e) => {
                warn!(error = %e, key = PREFERRED_LANGUAGE_KEY, "session store unreadable");
                None
            }
        }
    }

    pub fn set_preferred_language(&self, code: LanguageCode) {
        if let Err(e) = self.store.set(PREFERRED_LANGUAGE_KEY, code.code()) {
            warn!(error = %e, key = PREFERRED_LANGUAGE_KEY, "could not persist preferred language");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DisabledStore, MemoryStore};

    #[test]
    fn flag_round_trips_through_store() {
        let store = MemoryStore::new();
        let flags = SessionFlags::new(store.clone());
        assert!(!flags.detection_done());
        flags.mark_detection_done();
        assert!(flags.detection_done());
        assert_eq!(store.get(SESSION_FLAG_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn only_literal_true_counts_as_set() {
        let store = MemoryStore::new();
        store.set(SESSION_FLAG_KEY, "yes").unwrap();
        assert!(!SessionFlags::new(store).detection_done());
    }

    #[test]
    fn unknown_preferred_language_reads_as_none() {
        let store = MemoryStore::new();
        store.set(PREFERRED_LANGUAGE_KEY, "de").unwrap();
        assert_eq!(SessionFlags::new(store).preferred_language(), None);
    }

    #[test]
    fn disabled_store_is_tolerated() {
        let flags = SessionFlags::new(DisabledStore);
        flags.mark_detection_done();
        flags.set_preferred_language(LanguageCode::Fa);
        assert!(!flags.detection_done());
        assert_eq!(flags.preferred_language(), None);
    }
}
