//! Interactions reported by the widget adapters.

use shared::domain::{CourseId, StepId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Previous,
    Next,
}

impl ArrowDirection {
    pub fn offset(self) -> i64 {
        match self {
            ArrowDirection::Previous => -1,
            ArrowDirection::Next => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    StepClicked { course: CourseId, step: StepId },
    TabClicked(usize),
    Arrow(ArrowDirection),
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::StepClicked { .. } => "step_clicked",
            UiAction::TabClicked(_) => "tab_clicked",
            UiAction::Arrow(_) => "arrow",
        }
    }
}
