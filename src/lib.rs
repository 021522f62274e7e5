//! Civil Resistance Guide language redirect
//!
//! This library provides the landing-page behaviour of the guide: browser
//! language detection, the countdown redirect to a localized page, and the
//! navigation helpers used inside each page.

pub mod config;
pub mod core;
pub mod error;
pub mod navigation;
pub mod storage;
pub mod ui;
pub mod utils;

pub use crate::core::{run_guide, run_visit, DetectionState, RedirectController, VisitOutcome};
pub use crate::error::RedirectError;
pub use crate::ui::language::{LanguageCode, LanguageEntry, DEFAULT_LANGUAGE};

/// Library version
pub const VERSION: &str = "0.3.2";
