use shared::{
    domain::{wrap_tab_index, CourseId, StepId, TabKey},
    protocol::BridgeEvent,
};
use storage::ContentStore;
use tracing::debug;

use crate::{
    config::BoardSettings,
    render::{render_description, DescriptionBlock},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub course_id: CourseId,
    pub step_id: StepId,
    pub tab_index: usize,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            course_id: CourseId(1),
            step_id: StepId(1),
            tab_index: 0,
        }
    }
}

impl SelectionState {
    pub fn tab_key(&self) -> TabKey {
        TabKey::from_index(self.tab_index).unwrap_or(TabKey::DEFAULT)
    }
}

/// What a trigger produced: the panel content, and the event to report if
/// the trigger was a tree selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub blocks: Vec<DescriptionBlock>,
    pub event: Option<BridgeEvent>,
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    state: SelectionState,
    placeholder: String,
}

impl SelectionController {
    pub fn new(settings: &BoardSettings) -> Self {
        Self {
            state: SelectionState::default(),
            placeholder: settings.placeholder.clone(),
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Tree trigger. The only one that reports to the host.
    pub fn select_step(
        &mut self,
        store: &ContentStore,
        course_id: CourseId,
        step_id: StepId,
    ) -> Transition {
        self.state.course_id = course_id;
        self.state.step_id = step_id;
        debug!(course = course_id.0, step = step_id.0, "step selected");
        Transition {
            blocks: self.render(store),
            event: Some(BridgeEvent::TreeStep {
                course: course_id,
                step: step_id,
            }),
        }
    }

    /// Tab trigger. `index` may be out of range in either direction and wraps
    /// over `tab_count` slots. Slots past the known tab keys show the default
    /// tab's content.
    pub fn select_tab(
        &mut self,
        store: &ContentStore,
        index: i64,
        tab_count: usize,
    ) -> Transition {
        self.adopt_tab(index, tab_count);
        debug!(requested = index, tab = self.state.tab_index, "tab selected");
        Transition {
            blocks: self.render(store),
            event: None,
        }
    }

    /// Records the tab shown by the presentation layer without rendering.
    pub fn adopt_tab(&mut self, index: i64, tab_count: usize) {
        self.state.tab_index = wrap_tab_index(index, tab_count).unwrap_or_default();
    }

    /// Data-replaced trigger: same selection, fresh content.
    pub fn refresh(&self, store: &ContentStore) -> Transition {
        Transition {
            blocks: self.render(store),
            event: None,
        }
    }

    pub fn render(&self, store: &ContentStore) -> Vec<DescriptionBlock> {
        render_description(
            store.entry(self.state.course_id, self.state.step_id),
            self.state.tab_key(),
            &self.placeholder,
        )
    }
}
