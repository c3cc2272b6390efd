//! Description panel content for one step/tab.

use shared::domain::TabKey;
use storage::MissionEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionBlock {
    /// Literal line content. Never interpreted as markup.
    Text(String),
    /// Fixed-height blank block standing in for an all-whitespace line.
    Spacer,
    /// Shown alone when the step/tab has no content.
    Placeholder(String),
}

impl DescriptionBlock {
    pub fn text(&self) -> Option<&str> {
        match self {
            DescriptionBlock::Text(text) | DescriptionBlock::Placeholder(text) => Some(text),
            DescriptionBlock::Spacer => None,
        }
    }
}

pub fn render_description(
    entry: Option<&MissionEntry>,
    tab: TabKey,
    placeholder: &str,
) -> Vec<DescriptionBlock> {
    let lines = entry.and_then(|entry| entry.content_for(tab)).unwrap_or_default();
    if lines.is_empty() {
        return vec![DescriptionBlock::Placeholder(placeholder.to_string())];
    }

    lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                DescriptionBlock::Spacer
            } else {
                DescriptionBlock::Text(line.clone())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: TabKey, lines: &[&str]) -> MissionEntry {
        MissionEntry::from_lines(key, lines.iter().map(|line| line.to_string()).collect())
    }

    #[test]
    fn blank_lines_become_spacers() {
        let entry = entry(TabKey::Task, &["a", "   ", "", "<b>b</b>"]);
        assert_eq!(
            render_description(Some(&entry), TabKey::Task, "-"),
            vec![
                DescriptionBlock::Text("a".into()),
                DescriptionBlock::Spacer,
                DescriptionBlock::Spacer,
                DescriptionBlock::Text("<b>b</b>".into()),
            ]
        );
    }

    #[test]
    fn missing_entry_or_empty_lines_show_placeholder() {
        assert_eq!(
            render_description(None, TabKey::Detail, "none"),
            vec![DescriptionBlock::Placeholder("none".into())]
        );
        let empty = entry(TabKey::Detail, &[]);
        assert_eq!(
            render_description(Some(&empty), TabKey::Detail, "none"),
            vec![DescriptionBlock::Placeholder("none".into())]
        );
    }

    #[test]
    fn absent_tab_falls_back_to_task_content() {
        let entry = entry(TabKey::Task, &["task line"]);
        assert_eq!(
            render_description(Some(&entry), TabKey::Env, "none"),
            vec![DescriptionBlock::Text("task line".into())]
        );
    }
}
