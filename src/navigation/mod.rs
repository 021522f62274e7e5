//! Page navigation helpers: checklist persistence and scroll-spy.

pub mod checklist;
pub mod scroll_spy;

pub use checklist::{checkbox_id, Checklist, CHECKLIST_KEY};
pub use scroll_spy::{active_section, anchor_scroll_target, SectionBounds};
