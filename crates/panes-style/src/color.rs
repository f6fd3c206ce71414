//! Colour string parsing for border colours.

use crossterm::style::Color;

/// Parse `#rgb`, `#rrggbb` or a crossterm colour name (`cyan`,
/// `dark_grey`, ...).
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    match s.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => Color::try_from(s).ok(),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            // Expand #RGB to #RRGGBB
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Color::Rgb {
                r: r * 17,
                g: g * 17,
                b: b * 17,
            })
        }
        6 => Some(Color::Rgb {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        }),
        _ => None,
    }
}
