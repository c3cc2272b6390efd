use std::{collections::HashMap, fs, path::Path};

use client_core::BoardSettings;
use shared::domain::{CourseId, StepId};
use web_bridge::BridgeConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub initial_course: i64,
    pub initial_step: i64,
    pub placeholder: String,
    pub bridge_channel: String,
    pub bridge_method: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        let board = BoardSettings::default();
        let bridge = BridgeConfig::default();
        Self {
            initial_course: board.initial_course.0,
            initial_step: board.initial_step.0,
            placeholder: board.placeholder,
            bridge_channel: bridge.channel,
            bridge_method: bridge.method,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn board(&self) -> BoardSettings {
        BoardSettings {
            initial_course: CourseId(self.initial_course),
            initial_step: StepId(self.initial_step),
            placeholder: self.placeholder.clone(),
        }
    }

    pub fn bridge(&self) -> BridgeConfig {
        BridgeConfig {
            channel: self.bridge_channel.clone(),
            method: self.bridge_method.clone(),
        }
    }
}

/// Defaults, then `path` (if readable TOML), then `APP__*` environment
/// variables.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file(&mut settings, &raw);
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, toml::Value>>(raw) else {
        return;
    };

    if let Some(v) = file_cfg.get("initial_course").and_then(toml::Value::as_integer) {
        settings.initial_course = v;
    }
    if let Some(v) = file_cfg.get("initial_step").and_then(toml::Value::as_integer) {
        settings.initial_step = v;
    }
    if let Some(v) = file_cfg.get("placeholder").and_then(toml::Value::as_str) {
        settings.placeholder = v.to_string();
    }
    if let Some(v) = file_cfg.get("bridge_channel").and_then(toml::Value::as_str) {
        settings.bridge_channel = v.to_string();
    }
    if let Some(v) = file_cfg.get("bridge_method").and_then(toml::Value::as_str) {
        settings.bridge_method = v.to_string();
    }
    if let Some(v) = file_cfg.get("log_filter").and_then(toml::Value::as_str) {
        settings.log_filter = v.to_string();
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("APP__INITIAL_COURSE").and_then(|v| v.parse().ok()) {
        settings.initial_course = v;
    }
    if let Some(v) = var("APP__INITIAL_STEP").and_then(|v| v.parse().ok()) {
        settings.initial_step = v;
    }
    if let Some(v) = var("APP__PLACEHOLDER") {
        settings.placeholder = v;
    }
    if let Some(v) = var("APP__BRIDGE_CHANNEL") {
        settings.bridge_channel = v;
    }
    if let Some(v) = var("APP__BRIDGE_METHOD") {
        settings.bridge_method = v;
    }
    if let Some(v) = var("RUST_LOG") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
