use super::adapter::ColorConverter;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub selection_style: Style,
    pub done_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Green")
    }
}

impl Theme {
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let selection_bg = ColorConverter::shade(accent, 0.2, 0.3);

        Self {
            accent,
            selection_style: Style::default().bg(selection_bg).fg(Color::White),
            done_style: Style::default()
                .fg(accent)
                .add_modifier(Modifier::CROSSED_OUT),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
        }
    }
}

/// Accepts ratatui color names, `#rrggbb`/`#rgb`, and `orange`. Anything
/// else falls back to green.
fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if let Some(rgb) = s.strip_prefix('#').and_then(parse_hex_color) {
        return rgb;
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Green,
    }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
            parse_hex_color(&doubled)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#1DB863"), Color::Rgb(29, 184, 99));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("#12"), Color::Green);
        assert_eq!(parse_color("Invalid"), Color::Green);
    }

    #[test]
    fn test_done_style_uses_accent() {
        let theme = Theme::new("Magenta");
        assert_eq!(theme.done_style.fg, Some(Color::Magenta));
        assert!(theme.done_style.add_modifier.contains(Modifier::CROSSED_OUT));
    }
}
