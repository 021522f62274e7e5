#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use resistance_guide::config::RedirectConfig;
use resistance_guide::storage::KeyValueStore;
use resistance_guide::ui::language::{LanguageCode, LanguageEntry};
use resistance_guide::ui::navigator::LocationNavigator;
use resistance_guide::ui::presenter::Presenter;
use resistance_guide::RedirectController;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Detected(LanguageCode),
    Recommended(LanguageCode),
    Notice(bool),
    Countdown(u32),
    ManualChoice,
    Redirecting(String),
    PreferenceSaved(LanguageCode),
}

/// Presenter recording every call; clones share the record.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    shown: Arc<Mutex<Vec<Shown>>>,
}

impl RecordingPresenter {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }

    pub fn countdowns(&self) -> Vec<u32> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Countdown(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    pub fn manual_choice_shown(&self) -> bool {
        self.shown().contains(&Shown::ManualChoice)
    }

    fn push(&self, shown: Shown) {
        self.shown.lock().unwrap().push(shown);
    }
}

impl Presenter for RecordingPresenter {
    fn show_detected(&mut self, entry: &LanguageEntry) {
        self.push(Shown::Detected(entry.code));
    }

    fn highlight_recommended(&mut self, code: LanguageCode) {
        self.push(Shown::Recommended(code));
    }

    fn set_notice_visible(&mut self, visible: bool) {
        self.push(Shown::Notice(visible));
    }

    fn show_countdown(&mut self, remaining: u32) {
        self.push(Shown::Countdown(remaining));
    }

    fn show_manual_choice(&mut self) {
        self.push(Shown::ManualChoice);
    }

    fn show_redirecting(&mut self, entry: &LanguageEntry) {
        self.push(Shown::Redirecting(entry.target_page.to_string()));
    }

    fn show_preference_saved(&mut self, entry: &LanguageEntry) {
        self.push(Shown::PreferenceSaved(entry.code));
    }
}

pub struct Visit {
    pub controller: RedirectController,
    pub presenter: RecordingPresenter,
    pub navigator: LocationNavigator,
}

pub fn visit(config: RedirectConfig, store: impl KeyValueStore + 'static) -> Visit {
    let presenter = RecordingPresenter::default();
    let navigator = LocationNavigator::new();
    let controller = RedirectController::new(config, store, presenter.clone(), navigator.clone());
    Visit {
        controller,
        presenter,
        navigator,
    }
}
