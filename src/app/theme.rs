//! UI colors in one place, adjusted to what the terminal can show.

use crate::services::settings::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub menu_bar_bg: Color,
    pub menu_bar_fg: Color,
    pub menu_selected_bg: Color,
    pub menu_selected_fg: Color,
    pub menu_muted_fg: Color,
    pub dialog_border: Color,
    pub status_fg: Color,
    pub saved_fg: Color,
    pub selection_bg: Color,
    pub error_fg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("SCRIBE_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    support_from_env(&colorterm, &term)
}

fn support_from_env(colorterm: &str, term: &str) -> TerminalColorSupport {
    let truecolor = |v: &str| v.contains("truecolor") || v.contains("24bit") || v.contains("direct");
    if truecolor(colorterm) || truecolor(term) {
        TerminalColorSupport::TrueColor
    } else if term.contains("256color") {
        TerminalColorSupport::Ansi256
    } else {
        TerminalColorSupport::Ansi16
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            menu_bar_bg: Color::Indexed(7),       // Gray
            menu_bar_fg: Color::Indexed(0),       // Black
            menu_selected_bg: Color::Indexed(4),  // Blue
            menu_selected_fg: Color::Indexed(15), // White
            menu_muted_fg: Color::Indexed(8),     // DarkGray
            dialog_border: Color::Indexed(6),     // Cyan
            status_fg: Color::Reset,
            saved_fg: Color::Rgb(0x6A, 0x99, 0x55),
            selection_bg: Color::Rgb(0x26, 0x4F, 0x78),
            error_fg: Color::Indexed(1), // Red
        }
    }
}

impl UiTheme {
    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }
        for color in self.colors_mut() {
            *color = map_color_for_support(*color, support);
        }
    }

    fn colors_mut(&mut self) -> [&mut Color; 10] {
        [
            &mut self.menu_bar_bg,
            &mut self.menu_bar_fg,
            &mut self.menu_selected_bg,
            &mut self.menu_selected_fg,
            &mut self.menu_muted_fg,
            &mut self.dialog_border,
            &mut self.status_fg,
            &mut self.saved_fg,
            &mut self.selection_bg,
            &mut self.error_fg,
        ]
    }

    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let overrides = [
            (&settings.menu_bar_bg, &mut self.menu_bar_bg),
            (&settings.menu_bar_fg, &mut self.menu_bar_fg),
            (&settings.menu_selected_bg, &mut self.menu_selected_bg),
            (&settings.menu_selected_fg, &mut self.menu_selected_fg),
            (&settings.dialog_border, &mut self.dialog_border),
            (&settings.status_fg, &mut self.status_fg),
            (&settings.saved_fg, &mut self.saved_fg),
            (&settings.selection_bg, &mut self.selection_bg),
            (&settings.error_fg, &mut self.error_fg),
        ];
        for (value, slot) in overrides {
            match value.as_deref().map(parse_color) {
                Some(Some(color)) => *slot = color,
                Some(None) => tracing::warn!(value = ?value, "ignoring unknown theme color"),
                None => {}
            }
        }
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (_, value) => value,
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    (0u16..=255)
        .map(|i| i as u8)
        .min_by_key(|&i| {
            let (pr, pg, pb) = ansi256_index_to_rgb(i);
            color_distance_sq((r, g, b), (pr, pg, pb))
        })
        .unwrap_or(0)
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    ANSI16_RGB
        .iter()
        .enumerate()
        .min_by_key(|(_, rgb)| color_distance_sq((r, g, b), **rgb))
        .map(|(i, _)| i as u8)
        .unwrap_or(0)
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        return (
            level[(offset / 36) as usize],
            level[((offset / 6) % 6) as usize],
            level[(offset % 6) as usize],
        );
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
