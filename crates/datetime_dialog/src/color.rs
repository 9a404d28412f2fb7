//! Parse color strings the way mobile platforms do.
//!
//! Supports `#RRGGBB`, `#AARRGGBB` (note: alpha first) and a fixed set of color names.

use ecolor::Color32;

/// Why a color string was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("unknown color name {0:?}")]
    UnknownName(String),

    #[error("expected 6 or 8 hex digits after '#', got {0}")]
    InvalidLength(usize),

    #[error("{0:?} is not a hex digit")]
    InvalidDigit(char),
}

/// Named colors understood by [`parse_color`], as `0xAARRGGBB`.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0xFF00_0000),
    ("darkgray", 0xFF44_4444),
    ("gray", 0xFF88_8888),
    ("lightgray", 0xFFCC_CCCC),
    ("white", 0xFFFF_FFFF),
    ("red", 0xFFFF_0000),
    ("green", 0xFF00_FF00),
    ("blue", 0xFF00_00FF),
    ("yellow", 0xFFFF_FF00),
    ("cyan", 0xFF00_FFFF),
    ("magenta", 0xFFFF_00FF),
    ("aqua", 0xFF00_FFFF),
    ("fuchsia", 0xFFFF_00FF),
    ("darkgrey", 0xFF44_4444),
    ("grey", 0xFF88_8888),
    ("lightgrey", 0xFFCC_CCCC),
    ("lime", 0xFF00_FF00),
    ("maroon", 0xFF80_0000),
    ("navy", 0xFF00_0080),
    ("olive", 0xFF80_8000),
    ("purple", 0xFF80_0080),
    ("silver", 0xFFC0_C0C0),
    ("teal", 0xFF00_8080),
];

/// Parse a color string.
///
/// ```
/// # use datetime_dialog::{Color32, parse_color};
/// assert_eq!(parse_color("#ff0000"), Ok(Color32::RED));
/// assert_eq!(parse_color("#80ff0000"), Ok(Color32::from_rgba_unmultiplied(255, 0, 0, 128)));
/// assert_eq!(parse_color("Navy"), Ok(Color32::from_rgb(0, 0, 128)));
/// assert!(parse_color("#f00").is_err());
/// ```
///
/// # Errors
/// If the string is neither a 6 or 8 digit hex color nor a known color name.
pub fn parse_color(s: &str) -> Result<Color32, ParseColorError> {
    if let Some(hex) = s.strip_prefix('#') {
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }
        let argb = match hex.len() {
            6 => 0xFF00_0000 | hex_value(hex),
            8 => hex_value(hex),
            len => return Err(ParseColorError::InvalidLength(len)),
        };
        Ok(from_argb(argb))
    } else {
        let name = s.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|&(_, argb)| from_argb(argb))
            .ok_or_else(|| ParseColorError::UnknownName(s.to_owned()))
    }
}

/// `hex` must be at most 8 ASCII hex digits.
fn hex_value(hex: &str) -> u32 {
    hex.chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0, |value, digit| (value << 4) | digit)
}

fn from_argb(argb: u32) -> Color32 {
    let [a, r, g, b] = argb.to_be_bytes();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}
