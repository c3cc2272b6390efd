use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{
    domain::{mission_key, CourseId, CourseNode, StepId, TabKey},
    error::{json_kind, ContentError},
};
use tracing::debug;

pub mod normalize;
pub mod reference;

pub use normalize::{normalize_entry, normalize_lines};

/// Mission text for one step, keyed by tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionEntry(BTreeMap<TabKey, Vec<String>>);

impl MissionEntry {
    pub fn from_lines(key: TabKey, lines: Vec<String>) -> Self {
        let mut entry = Self::default();
        entry.insert(key, lines);
        entry
    }

    pub fn insert(&mut self, key: TabKey, lines: Vec<String>) {
        self.0.insert(key, lines);
    }

    pub fn lines(&self, key: TabKey) -> Option<&[String]> {
        self.0.get(&key).map(Vec::as_slice)
    }

    /// Lines shown for `key`, falling back to the default tab when the entry
    /// has nothing under that key.
    pub fn content_for(&self, key: TabKey) -> Option<&[String]> {
        self.lines(key).or_else(|| self.lines(TabKey::DEFAULT))
    }

    pub fn tab_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TabKey, &[String])> {
        self.0.iter().map(|(key, lines)| (*key, lines.as_slice()))
    }
}

pub type MissionTable = BTreeMap<String, MissionEntry>;

/// Tree configuration and mission text. Holds data only; rendering lives in
/// the client.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    tree: Vec<CourseNode>,
    missions: MissionTable,
}

impl ContentStore {
    pub fn new(tree: Vec<CourseNode>, missions: MissionTable) -> Self {
        Self { tree, missions }
    }

    pub fn reference() -> Self {
        Self::new(reference::tree(), reference::missions())
    }

    pub fn courses(&self) -> &[CourseNode] {
        &self.tree
    }

    /// Detached copy of the tree; mutating it never touches the store.
    pub fn tree_config(&self) -> Vec<CourseNode> {
        self.tree.clone()
    }

    /// Replaces the whole tree when `nodes` is a well-formed course sequence.
    /// Anything else leaves the current tree in place.
    pub fn set_tree_config(&mut self, nodes: &Value) -> Result<(), ContentError> {
        let tree = Vec::<CourseNode>::deserialize(nodes).map_err(ContentError::MalformedTree)?;
        self.replace_tree(tree);
        Ok(())
    }

    pub fn replace_tree(&mut self, tree: Vec<CourseNode>) {
        debug!(courses = tree.len(), "tree configuration replaced");
        self.tree = tree;
    }

    /// Detached copy of the full mission table.
    pub fn mission_text(&self) -> MissionTable {
        self.missions.clone()
    }

    pub fn entry(&self, course_id: CourseId, step_id: StepId) -> Option<&MissionEntry> {
        self.missions.get(&mission_key(course_id, step_id))
    }

    /// Normalizes and merges a partial mission table. Entries replace existing
    /// ones whole; keys not mentioned are kept. Returns how many entries were
    /// written.
    pub fn set_mission_text(&mut self, partial: &Value) -> Result<usize, ContentError> {
        let Value::Object(fields) = partial else {
            return Err(ContentError::MalformedMissionTable(json_kind(partial)));
        };

        let normalized = fields
            .iter()
            .filter_map(|(key, value)| {
                let entry = normalize_entry(value);
                if entry.is_none() {
                    debug!(key = key.as_str(), "skipping mission entry without content");
                }
                entry.map(|entry| (key.clone(), entry))
            })
            .collect();

        Ok(self.merge_missions(normalized))
    }

    pub fn merge_missions(&mut self, entries: MissionTable) -> usize {
        let written = entries.len();
        self.missions.extend(entries);
        debug!(written, total = self.missions.len(), "mission text merged");
        written
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
