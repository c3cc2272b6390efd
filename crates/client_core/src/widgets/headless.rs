//! In-memory widgets mirroring the page markup: collapsible course sections
//! holding step entries, and a row of tab slots above the description panel.

use shared::domain::{CourseId, CourseNode, StepId, TabKey};
use storage::reference::default_step_label;

use super::{TabWidget, TreeWidget};
use crate::{
    controller::{ArrowDirection, UiAction},
    render::DescriptionBlock,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepSlot {
    pub text: String,
    pub course_id: Option<CourseId>,
    pub step_id: Option<StepId>,
    pub active: bool,
    on_click: Option<UiAction>,
}

impl StepSlot {
    pub fn is_wired(&self) -> bool {
        self.on_click.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseSection {
    pub title: String,
    pub open: bool,
    pub header_active: bool,
    pub steps: Vec<StepSlot>,
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessTree {
    sections: Vec<CourseSection>,
}

impl HeadlessTree {
    /// Markup with `sections` course sections of `steps` blank step entries.
    pub fn with_layout(sections: usize, steps: usize) -> Self {
        let section = CourseSection {
            steps: vec![StepSlot::default(); steps],
            ..CourseSection::default()
        };
        Self {
            sections: vec![section; sections],
        }
    }

    pub fn sections(&self) -> &[CourseSection] {
        &self.sections
    }

    pub fn open_sections(&self) -> Vec<usize> {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, section)| section.open)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn active_step(&self) -> Option<(CourseId, StepId)> {
        self.sections
            .iter()
            .flat_map(|section| section.steps.iter())
            .find(|slot| slot.active)
            .and_then(|slot| Some((slot.course_id?, slot.step_id?)))
    }

    fn reconcile_slots(steps: &mut Vec<StepSlot>, need: usize) {
        if steps.len() < need {
            // An empty list has no template to clone from.
            let Some(last) = steps.last() else {
                return;
            };
            let template = StepSlot {
                course_id: last.course_id,
                step_id: last.step_id,
                ..StepSlot::default()
            };
            steps.resize(need, template);
        } else {
            steps.truncate(need);
        }
    }
}

impl TreeWidget for HeadlessTree {
    fn relabel(&mut self, courses: &[CourseNode]) {
        for section in &mut self.sections {
            section.open = false;
            section.header_active = false;
        }

        for (section, course) in self.sections.iter_mut().zip(courses) {
            section.title = course.title.clone();
            Self::reconcile_slots(&mut section.steps, course.steps.len());

            for (position, slot) in section.steps.iter_mut().enumerate() {
                let step = course.steps.get(position);
                slot.text = step
                    .map(|step| step.label.clone())
                    .filter(|label| !label.is_empty())
                    .unwrap_or_else(|| default_step_label(position + 1));
                slot.course_id = Some(course.id);
                slot.step_id = Some(
                    step.map(|step| step.id)
                        .unwrap_or(StepId(position as i64 + 1)),
                );
            }
        }
    }

    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn slot_count(&self, section: usize) -> Option<usize> {
        self.sections.get(section).map(|section| section.steps.len())
    }

    fn step_slots(&self, section: usize) -> Vec<(CourseId, StepId)> {
        self.sections
            .get(section)
            .map(|section| {
                section
                    .steps
                    .iter()
                    .filter_map(|slot| Some((slot.course_id?, slot.step_id?)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn wire_step_click(&mut self, section: usize, slot: usize, action: UiAction) {
        if let Some(slot) = self
            .sections
            .get_mut(section)
            .and_then(|section| section.steps.get_mut(slot))
        {
            slot.on_click = Some(action);
        }
    }

    fn click_step(&mut self, section: usize, slot: usize) -> Option<UiAction> {
        self.sections.get(section)?.steps.get(slot)?.on_click
    }

    fn toggle_section(&mut self, section: usize, open: bool) {
        if section >= self.sections.len() {
            return;
        }
        if open {
            for (index, other) in self.sections.iter_mut().enumerate() {
                other.open = index == section;
                other.header_active = index == section;
            }
        } else {
            self.sections[section].open = false;
            if !self.sections.iter().any(|other| other.open) {
                for other in &mut self.sections {
                    other.header_active = false;
                }
            }
        }
    }

    fn highlight_step(&mut self, course_id: CourseId, step_id: StepId) -> bool {
        let target = self.sections.iter().enumerate().find_map(|(index, section)| {
            section
                .steps
                .iter()
                .position(|slot| {
                    slot.course_id == Some(course_id) && slot.step_id == Some(step_id)
                })
                .map(|position| (index, position))
        });
        let Some((section, position)) = target else {
            return false;
        };

        for other in &mut self.sections {
            for slot in &mut other.steps {
                slot.active = false;
            }
        }
        self.sections[section].steps[position].active = true;
        if !self.sections[section].open {
            self.toggle_section(section, true);
        }
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSlot {
    pub label: String,
    pub active: bool,
    on_click: Option<UiAction>,
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessTabs {
    slots: Vec<TabSlot>,
    description: Vec<DescriptionBlock>,
    has_arrows: bool,
    on_previous: Option<UiAction>,
    on_next: Option<UiAction>,
}

impl HeadlessTabs {
    pub fn new(labels: impl IntoIterator<Item = String>, has_arrows: bool) -> Self {
        Self {
            slots: labels
                .into_iter()
                .map(|label| TabSlot {
                    label,
                    ..TabSlot::default()
                })
                .collect(),
            has_arrows,
            ..Self::default()
        }
    }

    /// One slot per tab key, labelled, with previous/next arrows.
    pub fn standard() -> Self {
        Self::new(TabKey::ALL.map(|key| key.label().to_string()), true)
    }

    pub fn slots(&self) -> &[TabSlot] {
        &self.slots
    }

    pub fn description(&self) -> &[DescriptionBlock] {
        &self.description
    }

    pub fn description_lines(&self) -> Vec<&str> {
        self.description
            .iter()
            .map(|block| block.text().unwrap_or(""))
            .collect()
    }
}

impl TabWidget for HeadlessTabs {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn active_slot(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.active)
    }

    fn mark_active(&mut self, index: usize) {
        for (position, slot) in self.slots.iter_mut().enumerate() {
            slot.active = position == index;
        }
    }

    fn render_description(&mut self, blocks: &[DescriptionBlock]) {
        self.description = blocks.to_vec();
    }

    fn wire_tab_click(&mut self, index: usize, action: UiAction) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.on_click = Some(action);
        }
    }

    fn wire_arrow(&mut self, direction: ArrowDirection, action: UiAction) {
        if !self.has_arrows {
            return;
        }
        match direction {
            ArrowDirection::Previous => self.on_previous = Some(action),
            ArrowDirection::Next => self.on_next = Some(action),
        }
    }

    fn click_tab(&mut self, index: usize) -> Option<UiAction> {
        self.slots.get(index)?.on_click
    }

    fn click_arrow(&mut self, direction: ArrowDirection) -> Option<UiAction> {
        match direction {
            ArrowDirection::Previous => self.on_previous,
            ArrowDirection::Next => self.on_next,
        }
    }
}

#[cfg(test)]
#[path = "tests/headless_tests.rs"]
mod tests;
