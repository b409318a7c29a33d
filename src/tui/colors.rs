//! TUI color scheme integration.
//!
//! Converts the RGB strings stored in
//! [`Config::colourscheme`](crate::config::Config) into Ratatui [`Style`]s.

use ratatui::style::{Color, Modifier, Style};

use crate::config::Config;

/// Gold, used for informational text and accents.
const GOLD: Color = Color::Rgb(255, 215, 0);
/// Green, used for success messages.
const GREEN: Color = Color::Rgb(0, 255, 0);
/// Orange, used for warnings.
const ORANGE: Color = Color::Rgb(255, 165, 0);
/// Red, used for validation errors.
const RED: Color = Color::Rgb(255, 0, 0);

/// Pre-computed styles for the settings page.
#[derive(Debug, Clone)]
pub struct TuiColors {
    /// Primary accent, from the "informational" role.
    pub primary: Style,
    /// Success messages, from the "success" role.
    pub success: Style,
    /// Warnings, from the "warning" role.
    pub warning: Style,
    /// Field errors, from the "error" role.
    pub error: Style,
    /// Normal text.
    pub text: Style,
    /// Secondary text such as help lines.
    pub muted: Style,
    /// The value being edited.
    pub highlight: Style,
    /// Borders and dividers.
    pub border: Style,
    /// Selected items.
    pub accent: Style,
    /// Panel titles.
    pub title: Style,
    /// Field labels.
    pub label: Style,
    /// Placeholder text in empty inputs.
    pub placeholder: Style,
}

impl TuiColors {
    /// Builds the styles from the config's colourscheme, falling back to the
    /// built-in colours for missing or unparsable entries.
    pub fn from_config(config: &Config) -> Self {
        let role = |name: &str, fallback: Color| {
            config
                .colourscheme
                .get(name)
                .and_then(|s| parse_color_string(s))
                .unwrap_or(fallback)
        };

        Self::with_palette(
            role("informational", GOLD),
            role("success", GREEN),
            role("warning", ORANGE),
            role("error", RED),
        )
    }

    fn with_palette(informational: Color, success: Color, warning: Color, error: Color) -> Self {
        Self {
            primary: Style::default().fg(informational),
            success: Style::default().fg(success),
            warning: Style::default().fg(warning),
            error: Style::default().fg(error),
            text: Style::default().fg(Color::White),
            muted: Style::default().fg(Color::DarkGray),
            highlight: Style::default()
                .fg(informational)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Gray),
            accent: Style::default().fg(informational),
            title: Style::default()
                .fg(informational)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Cyan),
            placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

impl Default for TuiColors {
    fn default() -> Self {
        Self::with_palette(GOLD, GREEN, ORANGE, RED)
    }
}

/// Parses a color string into a Ratatui [`Color`].
///
/// Supports `"255,215,0"` and `"#ffd700"` / `"#fd0"`.
pub fn parse_color_string(color_str: &str) -> Option<Color> {
    let trimmed = color_str.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        return hex_to_color(hex);
    }

    let parts: Vec<&str> = trimmed.split(',').collect();
    if parts.len() != 3 {
        return None;
    }
    let r = parts[0].trim().parse::<u8>().ok()?;
    let g = parts[1].trim().parse::<u8>().ok()?;
    let b = parts[2].trim().parse::<u8>().ok()?;
    Some(Color::Rgb(r, g, b))
}

fn hex_to_color(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => Some(Color::Rgb(
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}
