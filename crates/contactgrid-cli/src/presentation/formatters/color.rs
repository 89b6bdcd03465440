//! CSS color values to terminal colors.

use once_cell::sync::Lazy;
use ratatui::style::Color;
use regex::Regex;

/// Avatar background used when a record has no usable color (`tomato`).
pub const DEFAULT_AVATAR_COLOR: Color = Color::Rgb(255, 99, 71);

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid regex"));

static RGB_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*[\d.]+\s*)?\)$")
        .expect("valid regex")
});

const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("silver", (192, 192, 192)),
    ("maroon", (128, 0, 0)),
    ("olive", (128, 128, 0)),
    ("lime", (0, 255, 0)),
    ("aqua", (0, 255, 255)),
    ("cyan", (0, 255, 255)),
    ("teal", (0, 128, 128)),
    ("navy", (0, 0, 128)),
    ("fuchsia", (255, 0, 255)),
    ("magenta", (255, 0, 255)),
    ("pink", (255, 192, 203)),
    ("brown", (165, 42, 42)),
    ("tomato", (255, 99, 71)),
    ("coral", (255, 127, 80)),
    ("salmon", (250, 128, 114)),
    ("gold", (255, 215, 0)),
    ("khaki", (240, 230, 140)),
    ("indigo", (75, 0, 130)),
    ("violet", (238, 130, 238)),
    ("orchid", (218, 112, 214)),
    ("plum", (221, 160, 221)),
    ("crimson", (220, 20, 60)),
    ("chocolate", (210, 105, 30)),
    ("sienna", (160, 82, 45)),
    ("tan", (210, 180, 140)),
    ("turquoise", (64, 224, 208)),
    ("skyblue", (135, 206, 235)),
    ("steelblue", (70, 130, 180)),
    ("slateblue", (106, 90, 205)),
    ("royalblue", (65, 105, 225)),
    ("seagreen", (46, 139, 87)),
    ("forestgreen", (34, 139, 34)),
    ("darkorange", (255, 140, 0)),
    ("darkred", (139, 0, 0)),
    ("darkgreen", (0, 100, 0)),
    ("darkblue", (0, 0, 139)),
    ("rebeccapurple", (102, 51, 153)),
];

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` / `rgba(...)` and common named colors.
pub fn parse_css_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(caps) = HEX_COLOR.captures(value) {
        let hex = &caps[1];
        let expanded: String = if hex.len() == 3 {
            hex.chars().flat_map(|c| [c, c]).collect()
        } else {
            hex.to_string()
        };
        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }

    if let Some(caps) = RGB_COLOR.captures(value) {
        let channel = |i: usize| caps[i].parse::<u8>().ok();
        return Some(Color::Rgb(channel(1)?, channel(2)?, channel(3)?));
    }

    let lower = value.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, (r, g, b))| Color::Rgb(*r, *g, *b))
}

pub fn avatar_color(value: &str) -> Color {
    parse_css_color(value).unwrap_or(DEFAULT_AVATAR_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_css_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_css_color("#0F0"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_css_color("#12345"), None);
    }

    #[test]
    fn test_rgb_function() {
        assert_eq!(
            parse_css_color("rgb(70, 130, 180)"),
            Some(Color::Rgb(70, 130, 180))
        );
        assert_eq!(
            parse_css_color("rgba(1,2,3,0.5)"),
            Some(Color::Rgb(1, 2, 3))
        );
        assert_eq!(parse_css_color("rgb(300, 0, 0)"), None);
    }

    #[test]
    fn test_named_colors_case_insensitive() {
        assert_eq!(parse_css_color("Tomato"), Some(DEFAULT_AVATAR_COLOR));
        assert_eq!(parse_css_color(" red "), Some(Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_avatar_color_falls_back_to_tomato() {
        assert_eq!(avatar_color(""), DEFAULT_AVATAR_COLOR);
        assert_eq!(avatar_color("hsl(10, 20%, 30%)"), DEFAULT_AVATAR_COLOR);
        assert_eq!(avatar_color("navy"), Color::Rgb(0, 0, 128));
    }
}
