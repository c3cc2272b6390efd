use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(CourseId);
id_newtype!(StepId);

/// Key into the mission table for one step: `"<course>-<step>"`.
pub fn mission_key(course_id: CourseId, step_id: StepId) -> String {
    format!("{course_id}-{step_id}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepNode {
    pub id: StepId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseNode {
    pub id: CourseId,
    pub title: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub completed: bool,
    pub steps: Vec<StepNode>,
}

impl CourseNode {
    pub fn step(&self, step_id: StepId) -> Option<&StepNode> {
        self.steps.iter().find(|step| step.id == step_id)
    }
}

/// Content categories of a step, in display order. The order must match the
/// tab slot order of the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabKey {
    Task,
    Detail,
    Constraint,
    Env,
    Skill,
}

impl TabKey {
    pub const ALL: [TabKey; 5] = [
        TabKey::Task,
        TabKey::Detail,
        TabKey::Constraint,
        TabKey::Env,
        TabKey::Skill,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Bucket that unstructured (legacy) content lands in.
    pub const DEFAULT: TabKey = TabKey::Task;

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TabKey::Task => "task",
            TabKey::Detail => "detail",
            TabKey::Constraint => "constraint",
            TabKey::Env => "env",
            TabKey::Skill => "skill",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            TabKey::Task => "수행 과제",
            TabKey::Detail => "세부 내용",
            TabKey::Constraint => "제약 조건",
            TabKey::Env => "개발 환경",
            TabKey::Skill => "획득 역량",
        }
    }
}

/// Cyclic wrap of a signed tab index into `0..len`. Returns `None` when there
/// are no tabs at all.
pub fn wrap_tab_index(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as i64;
    Some((((index % len) + len) % len) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mission_key_joins_course_and_step() {
        assert_eq!(mission_key(CourseId(5), StepId(2)), "5-2");
    }

    #[test]
    fn wraps_tab_index_in_both_directions() {
        assert_eq!(wrap_tab_index(-1, 5), Some(4));
        assert_eq!(wrap_tab_index(5, 5), Some(0));
        assert_eq!(wrap_tab_index(-11, 5), Some(4));
        assert_eq!(wrap_tab_index(2, 5), Some(2));
        assert_eq!(wrap_tab_index(0, 0), None);
    }

    #[test]
    fn tab_keys_round_trip_through_names() {
        for key in TabKey::ALL {
            assert_eq!(TabKey::parse(key.as_str()), Some(key));
            assert_eq!(TabKey::from_index(key.index()), Some(key));
        }
        assert_eq!(TabKey::parse("notes"), None);
    }

    #[test]
    fn completed_flag_defaults_to_false() {
        let course: CourseNode =
            serde_json::from_str(r#"{"id":1,"title":"c","steps":[{"id":1,"label":"s"}]}"#)
                .expect("course");
        assert!(!course.completed);
        assert_eq!(course.step(StepId(1)).map(|s| s.label.as_str()), Some("s"));
    }
}
