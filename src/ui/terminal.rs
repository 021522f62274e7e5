//! Terminal rendering of the language notice

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use indicatif::{ProgressBar, ProgressStyle};

use crate::ui::language::{LanguageCode, LanguageEntry};
use crate::ui::localization::{Localization, LocalizationKey};
use crate::ui::presenter::Presenter;

/// Table of every localized page, optionally marking the recommended one.
pub fn language_table(localization: &Localization, recommended: Option<LanguageCode>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        localization.get(LocalizationKey::ColumnCode),
        localization.get(LocalizationKey::ColumnLanguage),
        localization.get(LocalizationKey::ColumnPage),
    ]);

    for code in LanguageCode::all() {
        let entry = code.entry();
        let marker = if recommended == Some(*code) { " ★" } else { "" };
        table.add_row(vec![
            Cell::new(format!("{}{}", code, marker)),
            Cell::new(format!("{} {}", entry.display_glyph, entry.display_name)),
            Cell::new(entry.target_page),
        ]);
    }
    table
}

/// Presenter printing to stdout, with the countdown drawn as a progress bar.
pub struct TerminalPresenter {
    localization: Localization,
    countdown_total: u32,
    recommended: Option<LanguageCode>,
    bar: Option<ProgressBar>,
}

impl TerminalPresenter {
    pub fn new(countdown_total: u32) -> Self {
        Self {
            localization: Localization::new(LanguageCode::En),
            countdown_total,
            recommended: None,
            bar: None,
        }
    }

    fn countdown_bar(&mut self) -> &ProgressBar {
        let total = u64::from(self.countdown_total);
        self.bar.get_or_insert_with(|| {
            let bar = ProgressBar::new(total);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {wide_msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("##-"),
            );
            bar
        })
    }

    fn finish_bar(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Presenter for TerminalPresenter {
    fn show_detected(&mut self, entry: &LanguageEntry) {
        self.localization = Localization::new(entry.code);
        let name = format!("{} {}", entry.display_glyph, entry.display_name);
        println!("{}", self.localization.get_detected_language(&name).bold().green());
    }

    fn highlight_recommended(&mut self, code: LanguageCode) {
        self.recommended = Some(code);
    }

    fn set_notice_visible(&mut self, visible: bool) {
        if visible {
            println!("{}", self.localization.get(LocalizationKey::CancelHint).dimmed());
        } else {
            self.finish_bar();
        }
    }

    fn show_countdown(&mut self, remaining: u32) {
        let message = self.localization.get_countdown(remaining);
        let elapsed = u64::from(self.countdown_total.saturating_sub(remaining));
        let bar = self.countdown_bar();
        bar.set_position(elapsed);
        bar.set_message(message);
    }

    fn show_manual_choice(&mut self) {
        self.finish_bar();
        println!("\n{}", self.localization.get(LocalizationKey::ManualChoice).bold().yellow());
        println!("{}", language_table(&self.localization, self.recommended));
    }

    fn show_redirecting(&mut self, entry: &LanguageEntry) {
        self.finish_bar();
        println!("{}", self.localization.get_redirecting(entry.target_page).bold().cyan());
    }

    fn show_preference_saved(&mut self, entry: &LanguageEntry) {
        println!("{}", self.localization.get_preference_saved(entry.display_name).green());
    }
}
