//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` terminal columns, marking the cut with `…`.
///
/// Width is measured in display columns, so CJK characters and emoji count
/// double and are never split.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Leave one column for the ellipsis
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorter_than_max_is_unchanged() {
        assert_eq!(truncate_to_width("Lamp", 10), "Lamp");
        assert_eq!(truncate_to_width("Lamp", 4), "Lamp");
    }

    #[test]
    fn test_ascii_truncation() {
        assert_eq!(truncate_to_width("Desk lamp with shade", 8), "Desk la…");
    }

    #[test]
    fn test_wide_characters_not_split() {
        // Each character is 2 columns wide
        let s = "日本語";
        assert_eq!(truncate_to_width(s, 4), "日…");
        assert_eq!(truncate_to_width(s, 5), "日本…");
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }
}
