//! Presentation surface seen by the redirect controller

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::ui::language::{LanguageCode, LanguageEntry};
use crate::ui::localization::{Localization, LocalizationKey};

/// Everything the controller is allowed to change on the page.
pub trait Presenter: Send {
    fn show_detected(&mut self, entry: &LanguageEntry);

    /// Mark the language control matching the detected language.
    fn highlight_recommended(&mut self, code: LanguageCode);

    fn set_notice_visible(&mut self, visible: bool);

    fn show_countdown(&mut self, remaining: u32);

    /// Replace the notice with a prompt asking the user to pick a language.
    fn show_manual_choice(&mut self);

    fn show_redirecting(&mut self, entry: &LanguageEntry);

    fn show_preference_saved(&mut self, _entry: &LanguageEntry) {}
}

/// A language-selection control on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageButton {
    pub code: LanguageCode,
    pub recommended: bool,
}

/// In-memory model of the page elements the controller touches.
///
/// An element is `None` when the page does not have it; updates to a
/// missing element do nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSurface {
    pub detection_message: Option<String>,
    pub countdown: Option<String>,
    pub notice_visible: Option<bool>,
    pub manual_prompt: Option<String>,
    pub status: Option<String>,
    pub language_buttons: Vec<LanguageButton>,
}

impl PageSurface {
    /// A page carrying every element, notice hidden.
    pub fn complete() -> Self {
        Self {
            detection_message: Some(String::new()),
            countdown: Some(String::new()),
            notice_visible: Some(false),
            manual_prompt: Some(String::new()),
            status: Some(String::new()),
            language_buttons: LanguageCode::all()
                .iter()
                .map(|&code| LanguageButton {
                    code,
                    recommended: false,
                })
                .collect(),
        }
    }

    pub fn recommended(&self) -> Vec<LanguageCode> {
        self.language_buttons
            .iter()
            .filter(|button| button.recommended)
            .map(|button| button.code)
            .collect()
    }
}

fn write_text(slot: &mut Option<String>, element: &str, text: String) {
    match slot {
        Some(current) => *current = text,
        None => debug!(element, "page element missing, skipping update"),
    }
}

/// Presenter writing into a shared [`PageSurface`].
#[derive(Debug, Clone)]
pub struct SurfacePresenter {
    surface: Arc<Mutex<PageSurface>>,
    localization: Localization,
}

impl SurfacePresenter {
    pub fn new(surface: PageSurface) -> Self {
        Self {
            surface: Arc::new(Mutex::new(surface)),
            localization: Localization::new(LanguageCode::En),
        }
    }

    /// Copy of the page as it currently looks.
    pub fn snapshot(&self) -> PageSurface {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PageSurface> {
        self.surface.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Presenter for SurfacePresenter {
    fn show_detected(&mut self, entry: &LanguageEntry) {
        let text = self
            .localization
            .get_detected_language(&format!("{} {}", entry.display_glyph, entry.display_name));
        write_text(&mut self.lock().detection_message, "detection-message", text);
    }

    fn highlight_recommended(&mut self, code: LanguageCode) {
        let mut surface = self.lock();
        match surface.language_buttons.iter_mut().find(|b| b.code == code) {
            Some(button) => button.recommended = true,
            None => debug!(%code, "no language button for recommended language"),
        }
    }

    fn set_notice_visible(&mut self, visible: bool) {
        match &mut self.lock().notice_visible {
            Some(current) => *current = visible,
            None => debug!(element = "redirect-notice", "page element missing, skipping update"),
        }
    }

    fn show_countdown(&mut self, remaining: u32) {
        write_text(&mut self.lock().countdown, "countdown", remaining.to_string());
    }

    fn show_manual_choice(&mut self) {
        let text = self.localization.get(LocalizationKey::ManualChoice).to_string();
        let mut surface = self.lock();
        if let Some(visible) = surface.notice_visible.as_mut() {
            *visible = false;
        }
        write_text(&mut surface.manual_prompt, "manual-prompt", text);
    }

    fn show_redirecting(&mut self, entry: &LanguageEntry) {
        let text = self.localization.get_redirecting(entry.target_page);
        write_text(&mut self.lock().status, "status", text);
    }

    fn show_preference_saved(&mut self, entry: &LanguageEntry) {
        let text = self.localization.get_preference_saved(entry.display_name);
        write_text(&mut self.lock().status, "status", text);
    }
}
