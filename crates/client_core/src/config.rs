use serde::Deserialize;
use shared::domain::{CourseId, StepId};

pub const DEFAULT_PLACEHOLDER: &str = "[ 미션 설명 자리 ]";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub initial_course: CourseId,
    pub initial_step: StepId,
    pub placeholder: String,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            initial_course: CourseId(3),
            initial_step: StepId(1),
            placeholder: DEFAULT_PLACEHOLDER.into(),
        }
    }
}
