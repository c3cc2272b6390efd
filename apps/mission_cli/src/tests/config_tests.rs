use super::*;

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn defaults_match_reference_page() {
    let settings = Settings::default();
    assert_eq!(settings.initial_course, 3);
    assert_eq!(settings.initial_step, 1);
    assert_eq!(settings.bridge_channel, "WebBridge");
    assert_eq!(settings.bridge_method, "OnBrowserEvent");
    assert_eq!(settings.board(), BoardSettings::default());
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
initial_course = 5
initial_step = 2
bridge_channel = "Bridge"
placeholder = "nothing yet"
"#,
    );
    assert_eq!(settings.initial_course, 5);
    assert_eq!(settings.initial_step, 2);
    assert_eq!(settings.bridge_channel, "Bridge");
    assert_eq!(settings.bridge_method, "OnBrowserEvent");
    assert_eq!(settings.board().placeholder, "nothing yet");
}

#[test]
fn malformed_file_is_ignored() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "initial_course = [");
    assert_eq!(settings, Settings::default());
}

#[test]
fn env_overrides_file_and_skips_unparsable_numbers() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "initial_course = 5");
    apply_env(&mut settings, |key| match key {
        "APP__INITIAL_COURSE" => Some("7".into()),
        "APP__INITIAL_STEP" => Some("two".into()),
        "APP__BRIDGE_METHOD" => Some("OnEvent".into()),
        _ => None,
    });
    assert_eq!(settings.initial_course, 7);
    assert_eq!(settings.initial_step, 1);
    assert_eq!(settings.bridge().method, "OnEvent");
}

#[test]
fn loads_settings_from_file_on_disk() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("mission_cli_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("missions.toml");
    fs::write(&path, "bridge_method = \"OnStep\"\n").expect("write config");

    let settings = load_settings(&path);
    assert_eq!(settings.bridge_method, "OnStep");

    fs::remove_dir_all(temp_root).expect("cleanup");
}
