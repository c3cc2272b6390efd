//! Public entry points for the embedding page.
//!
//! No method here panics or returns an error: malformed input and missing
//! collaborators are logged and turned into no-ops.

use serde_json::Value;
use shared::{
    domain::{CourseId, CourseNode, StepId},
    protocol::BridgeEvent,
};
use storage::{ContentStore, MissionTable};
use tracing::{debug, info, warn};
use web_bridge::EventBridge;

use crate::{
    config::BoardSettings,
    controller::{ArrowDirection, SelectionController, SelectionState, Transition, UiAction},
    widgets::{TabWidget, TreeWidget},
};

pub struct MissionBoard<T, W> {
    store: ContentStore,
    controller: SelectionController,
    settings: BoardSettings,
    tree: T,
    tabs: W,
    bridge: Option<EventBridge>,
    initialized: bool,
}

impl<T: TreeWidget, W: TabWidget> MissionBoard<T, W> {
    pub fn new(store: ContentStore, tree: T, tabs: W, settings: BoardSettings) -> Self {
        Self {
            controller: SelectionController::new(&settings),
            store,
            settings,
            tree,
            tabs,
            bridge: None,
            initialized: false,
        }
    }

    pub fn with_bridge(mut self, bridge: EventBridge) -> Self {
        self.bridge = Some(bridge);
        self
    }

    pub fn bridge(&self) -> Option<&EventBridge> {
        self.bridge.as_ref()
    }

    pub fn bridge_mut(&mut self) -> Option<&mut EventBridge> {
        self.bridge.as_mut()
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn tabs(&self) -> &W {
        &self.tabs
    }

    pub fn selection(&self) -> SelectionState {
        self.controller.state()
    }

    /// Wires the widgets, activates a tab and performs the startup selection,
    /// which reports one `tree.step` event. Later calls do nothing.
    pub fn init(&mut self) {
        if self.initialized {
            debug!("board already initialized");
            return;
        }
        self.initialized = true;

        self.relabel_tree();
        self.wire_tabs();
        match self.tabs.active_slot() {
            Some(preset) => self.controller.adopt_tab(preset as i64, self.tabs.slot_count()),
            None => self.set_active_tab_index(0),
        }
        self.select_initial(self.settings.initial_course, self.settings.initial_step);
        info!(
            course = self.selection().course_id.0,
            step = self.selection().step_id.0,
            "mission board initialized"
        );
    }

    /// Tree-selection trigger: updates course and step, re-renders with the
    /// current tab and reports the selection to the host.
    pub fn update_mission(&mut self, course_id: CourseId, step_id: StepId) {
        self.tree.highlight_step(course_id, step_id);
        let transition = self.controller.select_step(&self.store, course_id, step_id);
        self.apply(transition);
    }

    pub fn tree_config(&self) -> Vec<CourseNode> {
        self.store.tree_config()
    }

    pub fn mission_text(&self) -> MissionTable {
        self.store.mission_text()
    }

    /// Replaces the tree when `nodes` is a course sequence; otherwise ignored.
    pub fn set_tree_config(&mut self, nodes: &Value) {
        match self.store.set_tree_config(nodes) {
            Ok(()) => self.after_tree_replaced(),
            Err(err) => warn!("ignoring tree configuration: {err}"),
        }
    }

    pub fn replace_tree(&mut self, courses: Vec<CourseNode>) {
        self.store.replace_tree(courses);
        self.after_tree_replaced();
    }

    /// Merges a partial mission table and re-renders the current step.
    pub fn set_mission_text(&mut self, partial: &Value) {
        match self.store.set_mission_text(partial) {
            Ok(_) => {
                let transition = self.controller.refresh(&self.store);
                self.apply(transition);
            }
            Err(err) => warn!("ignoring mission text: {err}"),
        }
    }

    pub fn set_mission_content(&mut self, partial: &Value) {
        self.set_mission_text(partial);
    }

    pub fn active_tab_index(&self) -> usize {
        self.selection().tab_index
    }

    /// Tab trigger. Any index is accepted and wraps around the tab row.
    pub fn set_active_tab_index(&mut self, index: i64) {
        if self.tabs.slot_count() == 0 {
            debug!("no tab slots; tab change ignored");
            return;
        }
        let transition = self
            .controller
            .select_tab(&self.store, index, self.tabs.slot_count());
        self.tabs.mark_active(self.controller.state().tab_index);
        self.apply(transition);
    }

    pub fn dispatch(&mut self, action: UiAction) {
        debug!(action = action.name(), "dispatching ui action");
        match action {
            UiAction::StepClicked { course, step } => self.update_mission(course, step),
            UiAction::TabClicked(index) => self.set_active_tab_index(index as i64),
            UiAction::Arrow(direction) => {
                self.set_active_tab_index(self.active_tab_index() as i64 + direction.offset())
            }
        }
    }

    pub fn click_step(&mut self, section: usize, slot: usize) {
        if let Some(action) = self.tree.click_step(section, slot) {
            self.dispatch(action);
        }
    }

    pub fn click_tab(&mut self, index: usize) {
        if let Some(action) = self.tabs.click_tab(index) {
            self.dispatch(action);
        }
    }

    pub fn click_arrow(&mut self, direction: ArrowDirection) {
        if let Some(action) = self.tabs.click_arrow(direction) {
            self.dispatch(action);
        }
    }

    pub fn toggle_section(&mut self, section: usize, open: bool) {
        self.tree.toggle_section(section, open);
    }

    fn after_tree_replaced(&mut self) {
        self.relabel_tree();
        let transition = self.controller.refresh(&self.store);
        self.apply(transition);
    }

    fn relabel_tree(&mut self) {
        self.tree.relabel(self.store.courses());
        for section in 0..self.tree.section_count() {
            for (slot, (course, step)) in self.tree.step_slots(section).into_iter().enumerate() {
                self.tree
                    .wire_step_click(section, slot, UiAction::StepClicked { course, step });
            }
        }
    }

    fn wire_tabs(&mut self) {
        for index in 0..self.tabs.slot_count() {
            self.tabs.wire_tab_click(index, UiAction::TabClicked(index));
        }
        for direction in [ArrowDirection::Previous, ArrowDirection::Next] {
            self.tabs.wire_arrow(direction, UiAction::Arrow(direction));
        }
    }

    /// Startup selection goes through a simulated click so the host sees the
    /// same `tree.step` event a user click would produce.
    fn select_initial(&mut self, course_id: CourseId, step_id: StepId) {
        let Some(section) = position_of(course_id.0) else {
            return;
        };
        let Some(slots) = self.tree.slot_count(section) else {
            debug!(course = course_id.0, "initial course section missing");
            return;
        };
        self.tree.toggle_section(section, true);

        let slot = position_of(step_id.0)
            .filter(|slot| *slot < slots)
            .unwrap_or(0);
        self.click_step(section, slot);
    }

    fn apply(&mut self, transition: Transition) {
        self.tabs.render_description(&transition.blocks);
        if let Some(event) = transition.event {
            self.safe_emit(&event);
        }
    }

    fn safe_emit(&mut self, event: &BridgeEvent) {
        match self.bridge.as_mut() {
            Some(bridge) => bridge.emit_event(event),
            None => debug!(?event, "no bridge attached; event dropped"),
        }
    }
}

/// Zero-based position of a one-based id.
fn position_of(id: i64) -> Option<usize> {
    id.checked_sub(1).and_then(|position| usize::try_from(position).ok())
}

#[cfg(test)]
#[path = "tests/board_tests.rs"]
mod tests;
