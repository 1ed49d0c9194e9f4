use super::*;
use tempfile::tempdir;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.font_size, 18);
    assert_eq!(settings.tab_size, 4);
    assert!(settings.keybindings.is_empty());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let settings = load_from(&dir.path().join("settings.json")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "font_size": 12, "keybindings": [{ "key": "ctrl+k", "command": "find" }] }"#,
    )
    .unwrap();

    let settings = load_from(&path).unwrap();
    assert_eq!(settings.font_size, 12);
    assert_eq!(settings.tab_size, 4);
    assert_eq!(
        settings.keybindings,
        vec![KeybindingRule {
            key: "ctrl+k".to_string(),
            command: "find".to_string(),
        }]
    );
}

#[test]
fn test_out_of_range_values_are_clamped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "font_size": 99, "tab_size": 0, "scroll_lines": 0 }"#).unwrap();

    let settings = load_from(&path).unwrap();
    assert_eq!(settings.font_size, FONT_SIZE_MAX);
    assert_eq!(settings.tab_size, 1);
    assert_eq!(settings.scroll_lines, 1);
}

#[test]
fn test_invalid_json_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains("settings.json"));
}

#[test]
fn test_theme_overrides_are_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r##"{ "theme": { "selection_bg": "#223344" } }"##).unwrap();

    let settings = load_from(&path).unwrap();
    assert_eq!(settings.theme.selection_bg.as_deref(), Some("#223344"));
    assert!(settings.theme.menu_bar_bg.is_none());
}
