// Theme support for the TUI
//
// Color palettes selectable via config file or SHELF_THEME.
// "auto" uses the terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Names accepted by [`Theme::by_name`]
pub const THEME_NAMES: [&str; 4] = ["auto", "dracula", "nord", "gruvbox"];

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Content colors
    pub product_name: Color,
    pub price: Color,
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub selection: Color,
    pub muted: Color,

    // Terminal colors
    pub background: Color,
    pub foreground: Color,

    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name; unknown names fall back to "auto"
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            "auto" => Self::auto(),
            other => {
                tracing::warn!("Unknown theme {:?}, using auto", other);
                Self::auto()
            }
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            product_name: Color::Cyan,
            price: Color::Green,
            success: Color::Green,
            error: Color::Red,
            title: Color::Cyan,
            border: Color::White,
            highlight: Color::Yellow,
            status_bar: Color::Green,
            selection: Color::DarkGray,
            muted: Color::Gray,
            background: Color::Reset,
            foreground: Color::Reset,
            border_type: BorderType::Rounded,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            product_name: Color::Rgb(0x8b, 0xe9, 0xfd), // cyan
            price: Color::Rgb(0x50, 0xfa, 0x7b),        // green
            success: Color::Rgb(0x50, 0xfa, 0x7b),      // green
            error: Color::Rgb(0xff, 0x55, 0x55),        // red
            title: Color::Rgb(0xbd, 0x93, 0xf9),        // purple
            border: Color::Rgb(0x62, 0x72, 0xa4),       // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),    // yellow
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b),   // green
            selection: Color::Rgb(0x44, 0x47, 0x5a),    // current line
            muted: Color::Rgb(0x62, 0x72, 0xa4),        // comment
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            border_type: BorderType::Rounded,
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            product_name: Color::Rgb(0x88, 0xc0, 0xd0), // frost cyan
            price: Color::Rgb(0xa3, 0xbe, 0x8c),        // aurora green
            success: Color::Rgb(0xa3, 0xbe, 0x8c),      // aurora green
            error: Color::Rgb(0xbf, 0x61, 0x6a),        // aurora red
            title: Color::Rgb(0x81, 0xa1, 0xc1),        // frost blue
            border: Color::Rgb(0x4c, 0x56, 0x6a),       // polar night
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),    // aurora yellow
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c),   // aurora green
            selection: Color::Rgb(0x3b, 0x42, 0x52),    // polar night
            muted: Color::Rgb(0x61, 0x6e, 0x88),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xd8, 0xde, 0xe9),
            border_type: BorderType::Plain,
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            product_name: Color::Rgb(0x83, 0xa5, 0x98), // aqua
            price: Color::Rgb(0xb8, 0xbb, 0x26),        // green
            success: Color::Rgb(0xb8, 0xbb, 0x26),      // green
            error: Color::Rgb(0xfb, 0x49, 0x34),        // red
            title: Color::Rgb(0xfe, 0x80, 0x19),        // orange
            border: Color::Rgb(0x92, 0x83, 0x74),       // gray
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),    // yellow
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26),   // green
            selection: Color::Rgb(0x50, 0x49, 0x45),    // bg2
            muted: Color::Rgb(0x92, 0x83, 0x74),        // gray
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            border_type: BorderType::Thick,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_name_resolves() {
        for name in THEME_NAMES {
            assert_eq!(Theme::by_name(name).name, name);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive_with_fallback() {
        assert_eq!(Theme::by_name("Nord").name, "nord");
        assert_eq!(Theme::by_name("solarized").name, "auto");
    }
}
