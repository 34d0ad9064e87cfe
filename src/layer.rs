//! A single banner layer: one (color, pattern) pair
//!
//! A layer has no identity of its own; two layers with equal fields are
//! interchangeable. Each layer knows its fragment in every external
//! encoding, and the inverse constructors undo exactly those fragments.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::DecodeError;
use crate::palette::{Color, Pattern};

/// Start of the private-use block the banner font occupies.
pub const FONT_BASE: u32 = 0xE000;
/// One past the end of the banner font block.
pub const FONT_END: u32 = 0xF000;

/// One color+pattern decoration unit of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layer {
    pub color: Color,
    pub pattern: Pattern,
}

fn code_part_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([a-z]+)([0-9]+)$").unwrap())
}

impl Layer {
    pub fn new(color: Color, pattern: Pattern) -> Self {
        Self { color, pattern }
    }

    /// The layer's codepoint in the banner font.
    ///
    /// The font block is laid out as 16 rows of 0x100, one per color
    /// (ordered by [`Color::unicode_index`]). Within a row the pattern
    /// offset is the pattern's *decimal* ordinal string read back as a
    /// hexadecimal number, so ordinal 40 lands at offset 0x40, not 0x28.
    /// [`Layer::from_character`] reverses exactly this pair of steps; the
    /// two must never be changed independently.
    pub fn character(self) -> char {
        let offset = u32::from_str_radix(&self.pattern.ordinal().to_string(), 16)
            .expect("decimal digits are valid hexadecimal");
        // Max value is 0xE000 + 0xF00 + 0x40, well inside the block.
        char::from_u32(FONT_BASE + 0x100 * self.color.unicode_index() + offset)
            .expect("banner font block contains no invalid codepoints")
    }

    /// Inverse of [`Layer::character`].
    pub fn from_character(ch: char) -> Result<Self, DecodeError> {
        let value = ch as u32;
        if value < FONT_BASE || value >= FONT_END {
            return Err(DecodeError::CharOutOfRange(value));
        }
        let offset = value - FONT_BASE;
        let low = offset % 0x100;
        // Undo the decimal-read-as-hex trick: hex-format the offset, then
        // parse the digits back as decimal. Offsets with hex letters in
        // them can never come from a valid ordinal.
        let ordinal: u32 = format!("{low:x}")
            .parse()
            .map_err(|_| DecodeError::UnknownPatternOffset(low))?;
        let pattern =
            Pattern::from_ordinal(ordinal).ok_or(DecodeError::UnknownPatternOffset(low))?;
        let color_index = offset / 0x100;
        let color = Color::from_unicode_index(color_index)
            .ok_or(DecodeError::UnknownColorIndex(color_index))?;
        Ok(Self::new(color, pattern))
    }

    /// Fragment in the compact banner code: pattern token, then the
    /// color's decimal ordinal (`"bo3"` for a light-blue bordure).
    pub fn banner_code(self) -> String {
        format!("{}{}", self.pattern.data_value(), self.color.ordinal())
    }

    /// Inverse of [`Layer::banner_code`] for one already-isolated token.
    pub fn from_banner_code_part(part: &str) -> Result<Self, DecodeError> {
        let caps = code_part_regex()
            .captures(part)
            .ok_or_else(|| DecodeError::InvalidCodePart(part.to_string()))?;
        let pattern_part = &caps[1];
        let color_part = &caps[2];
        let pattern = Pattern::from_data_value(pattern_part)
            .ok_or_else(|| DecodeError::UnknownPatternToken(pattern_part.to_string()))?;
        let ordinal: u32 = color_part
            .parse()
            .map_err(|_| DecodeError::UnknownColorToken(color_part.to_string()))?;
        let color = Color::from_ordinal(ordinal)
            .ok_or_else(|| DecodeError::UnknownColorToken(color_part.to_string()))?;
        Ok(Self::new(color, pattern))
    }

    /// Two-character planetminecraft URL fragment, `None` only for the
    /// base sentinel (that service encodes the background separately).
    pub fn planetminecraft_part(self) -> Option<String> {
        let pattern_char = self.pattern.planetminecraft_index()?;
        Some(format!(
            "{}{}",
            self.color.planetminecraft_index(),
            pattern_char
        ))
    }

    /// Inverse of [`Layer::planetminecraft_part`].
    pub fn from_planetminecraft_part(part: &str) -> Result<Self, DecodeError> {
        let mut chars = part.chars();
        let (color_char, pattern_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(c), Some(p), None) => (c, p),
            _ => return Err(DecodeError::InvalidCodePart(part.to_string())),
        };
        let color = Color::from_planetminecraft_index(color_char)
            .ok_or(DecodeError::InvalidUrlChar(color_char))?;
        let pattern = Pattern::from_planetminecraft_index(pattern_char)
            .ok_or(DecodeError::InvalidUrlChar(pattern_char))?;
        Ok(Self::new(color, pattern))
    }

    /// Human-readable one-liner (`"Light Blue Bordure (◻)"`).
    pub fn describe(self) -> String {
        format!(
            "{} {} ({})",
            self.color.name(),
            self.pattern.name(),
            self.pattern.glyph()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{ALL_COLORS, ALL_PATTERNS};

    #[test]
    fn test_character_bijection_over_full_palette() {
        // Also proves no two patterns collide under the decimal-as-hex
        // offset encoding across the full 41-pattern table.
        let mut seen = std::collections::HashSet::new();
        for color in ALL_COLORS {
            for pattern in ALL_PATTERNS {
                let layer = Layer::new(color, pattern);
                let ch = layer.character();
                assert!(seen.insert(ch), "collision at {ch:?}");
                assert_eq!(Layer::from_character(ch).unwrap(), layer);
            }
        }
        assert_eq!(seen.len(), 16 * 41);
    }

    #[test]
    fn test_character_is_in_font_block() {
        for color in ALL_COLORS {
            for pattern in ALL_PATTERNS {
                let value = Layer::new(color, pattern).character() as u32;
                assert!(value >= FONT_BASE && value < FONT_END);
            }
        }
    }

    #[test]
    fn test_decimal_as_hex_offset() {
        // Ordinal 40 must land at offset 0x40 within a color row.
        let layer = Layer::new(Color::White, Pattern::ChiefIndented);
        assert_eq!(layer.character() as u32, FONT_BASE + 0x40);
    }

    #[test]
    fn test_from_character_out_of_range() {
        assert_eq!(
            Layer::from_character('A'),
            Err(DecodeError::CharOutOfRange(0x41))
        );
        assert!(Layer::from_character('\u{F000}').is_err());
    }

    #[test]
    fn test_from_character_bad_offset() {
        // Offset 0x4A hex-formats to "4a", which is not a decimal ordinal.
        let ch = char::from_u32(FONT_BASE + 0x4A).unwrap();
        assert_eq!(
            Layer::from_character(ch),
            Err(DecodeError::UnknownPatternOffset(0x4A))
        );
        // Offset 0x41 is decimal 41, one past the last pattern.
        let ch = char::from_u32(FONT_BASE + 0x41).unwrap();
        assert_eq!(
            Layer::from_character(ch),
            Err(DecodeError::UnknownPatternOffset(0x41))
        );
    }

    #[test]
    fn test_banner_code_roundtrip() {
        let layer = Layer::new(Color::LightBlue, Pattern::Bordure);
        assert_eq!(layer.banner_code(), "bo3");
        assert_eq!(Layer::from_banner_code_part("bo3").unwrap(), layer);
    }

    #[test]
    fn test_banner_code_part_failures() {
        assert!(matches!(
            Layer::from_banner_code_part("bo"),
            Err(DecodeError::InvalidCodePart(_))
        ));
        assert!(matches!(
            Layer::from_banner_code_part("3bo"),
            Err(DecodeError::InvalidCodePart(_))
        ));
        assert!(matches!(
            Layer::from_banner_code_part("zz3"),
            Err(DecodeError::UnknownPatternToken(_))
        ));
        assert!(matches!(
            Layer::from_banner_code_part("bo16"),
            Err(DecodeError::UnknownColorToken(_))
        ));
    }

    #[test]
    fn test_planetminecraft_part_roundtrip() {
        let layer = Layer::new(Color::Red, Pattern::Saltire);
        let part = layer.planetminecraft_part().unwrap();
        assert_eq!(part, "27");
        assert_eq!(Layer::from_planetminecraft_part(&part).unwrap(), layer);
        // Base sentinel has no pair encoding
        assert_eq!(
            Layer::new(Color::Red, Pattern::Banner).planetminecraft_part(),
            None
        );
    }

    #[test]
    fn test_planetminecraft_part_failures() {
        assert!(Layer::from_planetminecraft_part("2").is_err());
        assert!(Layer::from_planetminecraft_part("275").is_err());
        assert!(matches!(
            Layer::from_planetminecraft_part("!7"),
            Err(DecodeError::InvalidUrlChar('!'))
        ));
    }
}
