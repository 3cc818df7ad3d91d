use coolor::{Hsl, Rgb};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Styles derived from one accent color.
#[derive(Debug, Clone, Copy)]
#[allow(missing_docs)]
pub struct Theme {
    pub accent: Color,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub disabled_style: Style,
    pub enabled_style: Style,
    pub total_style: Style,
    pub base_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Cyan")
    }
}

impl Theme {
    /// Theme from a color name or hex code; unknown names fall back to cyan.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Theme from a parsed color.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let selection_bg = shade(accent, 0.2, 0.3);

        Self {
            accent,
            selection_style: Style::default().bg(selection_bg).fg(Color::White),
            dimmed_style: Style::default().fg(Color::DarkGray),
            disabled_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            enabled_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            total_style: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            base_style: Style::default().fg(Color::Reset),
        }
    }

    /// Style for a `[-]`/`[+]` control.
    #[must_use]
    pub const fn control_style(&self, enabled: bool) -> Style {
        if enabled {
            self.enabled_style
        } else {
            self.disabled_style
        }
    }
}

/// Same hue as `color` with the given lightness and saturation.
#[must_use]
pub fn shade(color: Color, lightness: f32, saturation: f32) -> Color {
    let (r, g, b) = rgb_of(color);
    let mut hsl: Hsl = Rgb::new(r, g, b).to_hsl();
    hsl.l = lightness;
    hsl.s = saturation;
    let rgb = hsl.to_rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn rgb_of(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red | Color::LightRed => (170, 0, 0),
        Color::Green | Color::LightGreen => (0, 170, 0),
        Color::Yellow | Color::LightYellow => (170, 85, 0),
        Color::Blue | Color::LightBlue => (0, 0, 170),
        Color::Magenta | Color::LightMagenta => (170, 0, 170),
        Color::Cyan | Color::LightCyan => (0, 170, 170),
        Color::Gray | Color::DarkGray => (128, 128, 128),
        _ => (0, 170, 170),
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if let Some((r, g, b)) = parse_hex_color(s) {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Cyan,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let double = |i: usize| channel(&hex[i..=i].repeat(2));
            Some((double(0)?, double(1)?, double(2)?))
        }
        _ => None,
    }
}
