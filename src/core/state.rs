//! Per-visit detection state

use std::fmt;

use crate::ui::language::LanguageCode;

/// Where a page visit stands in the detect-then-redirect flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionState {
    #[default]
    Undetected,
    Detected(LanguageCode),
    RedirectScheduled(LanguageCode, u32),
    /// Automatic redirect is off for this visit; the user picks a language.
    Cancelled,
    Redirected(LanguageCode),
}

impl DetectionState {
    /// `Cancelled` and `Redirected` end the visit's automatic behaviour.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DetectionState::Cancelled | DetectionState::Redirected(_))
    }

    pub fn language(&self) -> Option<LanguageCode> {
        match *self {
            DetectionState::Detected(code)
            | DetectionState::RedirectScheduled(code, _)
            | DetectionState::Redirected(code) => Some(code),
            DetectionState::Undetected | DetectionState::Cancelled => None,
        }
    }
}

impl fmt::Display for DetectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionState::Undetected => write!(f, "undetected"),
            DetectionState::Detected(code) => write!(f, "detected({})", code),
            DetectionState::RedirectScheduled(code, remaining) => {
                write!(f, "redirect-scheduled({}, {}s)", code, remaining)
            }
            DetectionState::Cancelled => write!(f, "cancelled"),
            DetectionState::Redirected(code) => write!(f, "redirected({})", code),
        }
    }
}
