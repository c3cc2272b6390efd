//! Capabilities the board needs from the presentation layer.
//!
//! Wiring registers the [`UiAction`] an element reports when clicked; the
//! embedding event loop feeds reported actions back to
//! [`MissionBoard::dispatch`](crate::MissionBoard::dispatch).

use shared::domain::{CourseId, CourseNode, StepId};

use crate::{
    controller::{ArrowDirection, UiAction},
    render::DescriptionBlock,
};

pub mod headless;

pub use headless::{CourseSection, HeadlessTabs, HeadlessTree, StepSlot, TabSlot};

pub trait TreeWidget {
    /// Rewrites section titles and step labels to match `courses`, growing or
    /// shrinking each section's step list. Closes every section.
    fn relabel(&mut self, courses: &[CourseNode]);

    fn section_count(&self) -> usize;

    /// Number of step slots in a section, `None` when the section is missing.
    fn slot_count(&self, section: usize) -> Option<usize>;

    /// Ids currently attached to each step slot of a section.
    fn step_slots(&self, section: usize) -> Vec<(CourseId, StepId)>;

    fn wire_step_click(&mut self, section: usize, slot: usize, action: UiAction);

    /// Simulates a click on a step slot and returns the wired action.
    fn click_step(&mut self, section: usize, slot: usize) -> Option<UiAction>;

    /// Opening a section closes all others.
    fn toggle_section(&mut self, section: usize, open: bool);

    /// Marks exactly one step active and opens its section. Returns `false`
    /// when no slot carries these ids.
    fn highlight_step(&mut self, course_id: CourseId, step_id: StepId) -> bool;
}

pub trait TabWidget {
    fn slot_count(&self) -> usize;

    fn active_slot(&self) -> Option<usize>;

    /// Visual active marker only; rendering is driven by the board.
    fn mark_active(&mut self, index: usize);

    fn render_description(&mut self, blocks: &[DescriptionBlock]);

    fn wire_tab_click(&mut self, index: usize, action: UiAction);

    /// Arrows are optional in the markup; wiring a missing arrow is a no-op.
    fn wire_arrow(&mut self, direction: ArrowDirection, action: UiAction);

    fn click_tab(&mut self, index: usize) -> Option<UiAction>;

    fn click_arrow(&mut self, direction: ArrowDirection) -> Option<UiAction>;
}
