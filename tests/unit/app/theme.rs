use super::*;

#[test]
fn ansi16_fallback_converts_rgb_to_indexed_colors() {
    let mut theme = UiTheme::default();
    theme.apply_color_support(TerminalColorSupport::Ansi16);

    assert!(matches!(theme.saved_fg, Color::Indexed(i) if i <= 15));
    assert!(matches!(theme.selection_bg, Color::Indexed(i) if i <= 15));
    assert_eq!(theme.status_fg, Color::Reset);
    assert_eq!(theme.error_fg, Color::Indexed(1));
}

#[test]
fn ansi256_fallback_keeps_indexed_colors() {
    let mut theme = UiTheme::default();
    theme.apply_color_support(TerminalColorSupport::Ansi256);

    assert_eq!(theme.menu_selected_bg, Color::Indexed(4));
    assert!(matches!(theme.saved_fg, Color::Indexed(_)));
}

#[test]
fn truecolor_leaves_theme_untouched() {
    let mut theme = UiTheme::default();
    theme.apply_color_support(TerminalColorSupport::TrueColor);
    assert_eq!(theme.saved_fg, Color::Rgb(0x6A, 0x99, 0x55));
}

#[test]
fn support_is_detected_from_env_values() {
    assert_eq!(
        support_from_env("truecolor", "xterm"),
        TerminalColorSupport::TrueColor
    );
    assert_eq!(
        support_from_env("", "xterm-256color"),
        TerminalColorSupport::Ansi256
    );
    assert_eq!(support_from_env("", "vt100"), TerminalColorSupport::Ansi16);
}

#[test]
fn parse_color_accepts_hex_and_names() {
    assert_eq!(parse_color("#FF8000"), Some(Color::Rgb(255, 128, 0)));
    assert_eq!(parse_color(" cyan "), Some(Color::Indexed(6)));
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("chartreuse"), None);
}

#[test]
fn settings_override_defaults() {
    let mut theme = UiTheme::default();
    let settings = ThemeSettings {
        selection_bg: Some("#102030".to_string()),
        error_fg: Some("not-a-color".to_string()),
        ..ThemeSettings::default()
    };
    theme.apply_settings(&settings);

    assert_eq!(theme.selection_bg, Color::Rgb(0x10, 0x20, 0x30));
    assert_eq!(theme.error_fg, Color::Indexed(1));
}
