//! Coercion of loosely-shaped mission input into [`MissionEntry`] values.

use serde_json::Value;
use shared::domain::TabKey;

use crate::MissionEntry;

/// Turns one tab's raw value into display lines.
///
/// `null` means "no content". Arrays are taken line by line, strings are split
/// on `\n` or `\r\n`, and any other scalar becomes a single line.
pub fn normalize_lines(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Null => None,
        Value::Array(items) => Some(items.iter().map(line_text).collect()),
        Value::String(text) => Some(split_lines(text)),
        other => Some(vec![other.to_string()]),
    }
}

/// Normalizes one mission entry.
///
/// A bare string or sequence is legacy content and lands in the default tab.
/// Objects keep only recognized tab keys with non-null values; an object with
/// none of them yields `None` and is not merged.
pub fn normalize_entry(value: &Value) -> Option<MissionEntry> {
    match value {
        Value::String(_) | Value::Array(_) => {
            let lines = normalize_lines(value)?;
            Some(MissionEntry::from_lines(TabKey::DEFAULT, lines))
        }
        Value::Object(fields) => {
            let mut entry = MissionEntry::default();
            for key in TabKey::ALL {
                if let Some(lines) = fields.get(key.as_str()).and_then(normalize_lines) {
                    entry.insert(key, lines);
                }
            }
            (!entry.is_empty()).then_some(entry)
        }
        _ => None,
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

fn line_text(item: &Value) -> String {
    match item {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn splits_strings_on_both_line_endings() {
        assert_eq!(
            normalize_lines(&json!("a\r\nb\nc")),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(normalize_lines(&json!("")), Some(vec![String::new()]));
    }

    #[test]
    fn null_is_absent_but_scalars_are_stringified() {
        assert_eq!(normalize_lines(&Value::Null), None);
        assert_eq!(normalize_lines(&json!(42)), Some(vec!["42".to_string()]));
        assert_eq!(normalize_lines(&json!(true)), Some(vec!["true".to_string()]));
    }

    #[test]
    fn null_line_items_become_blank_lines() {
        assert_eq!(
            normalize_lines(&json!(["a", null, 3])),
            Some(vec!["a".to_string(), String::new(), "3".to_string()])
        );
    }

    #[test]
    fn object_entry_drops_unknown_and_null_keys() {
        let entry = normalize_entry(&json!({
            "task": ["a"],
            "detail": null,
            "notes": ["ignored"],
            "env": "x\ny",
        }))
        .expect("entry");
        assert_eq!(entry.lines(TabKey::Task), Some(&["a".to_string()][..]));
        assert_eq!(entry.lines(TabKey::Detail), None);
        assert_eq!(
            entry.lines(TabKey::Env),
            Some(&["x".to_string(), "y".to_string()][..])
        );
        assert_eq!(entry.tab_count(), 2);
    }

    #[test]
    fn object_without_known_keys_is_dropped() {
        assert!(normalize_entry(&json!({ "notes": ["a"] })).is_none());
        assert!(normalize_entry(&json!(7)).is_none());
        assert!(normalize_entry(&Value::Null).is_none());
    }
}
