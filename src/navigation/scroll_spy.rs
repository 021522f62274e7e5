//! Section tracking for the table of contents

/// Distance below the viewport top at which a section counts as current
pub const SCROLL_SPY_OFFSET: f64 = 100.0;
/// Height of the fixed header that anchor scrolling must clear
pub const HEADER_OFFSET: f64 = 80.0;

/// Position of one guide section in document pixels
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Section to highlight for the given scroll position.
///
/// Sections are expected in document order. `None` while the reader is above
/// the first section.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .take_while(|section| scroll_y >= section.top - SCROLL_SPY_OFFSET)
        .last()
        .map(|section| section.id.as_str())
}

/// Scroll destination for a link to a section starting at `section_top`.
pub fn anchor_scroll_target(section_top: f64) -> f64 {
    (section_top - HEADER_OFFSET).max(0.0)
}
