//! RGB colors parsed from `#rrggbb` palette entries.

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Parse a hex color string like "#RRGGBB" (the leading `#` is required).
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Color::rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_colors() {
        assert_eq!(parse_hex_color("#012456"), Some(Color::rgb(0x01, 0x24, 0x56)));
        assert_eq!(parse_hex_color("#00FF41"), Some(Color::rgb(0, 255, 0x41)));
        assert_eq!(parse_hex_color("#ffffff"), Some(Color::WHITE));
    }

    #[test]
    fn reject_malformed_colors() {
        assert_eq!(parse_hex_color("012456"), None);
        assert_eq!(parse_hex_color("#0124"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }
}
