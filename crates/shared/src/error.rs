use thiserror::Error;

/// Rejected input to a content store setter. Public entry points absorb these;
/// they exist so callers inside the workspace can tell a no-op from a write.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("tree configuration must be a sequence of courses: {0}")]
    MalformedTree(#[source] serde_json::Error),
    #[error("mission text must be an object keyed by \"<course>-<step>\", got {0}")]
    MalformedMissionTable(&'static str),
}

pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
