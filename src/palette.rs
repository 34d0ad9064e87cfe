//! Static palette tables for banner colors, patterns, and layout directions
//!
//! Every enum here is a closed set with per-variant data expressed as
//! exhaustive `match` tables, so each table is total over its domain by
//! construction. Reverse lookups return `Option` and leave it to the
//! consuming codec to report a decode failure.
//!
//! The index values are a compatibility surface: external tools parse the
//! encodings built from them, so the tables must not drift.

use serde::{Deserialize, Serialize};

/// The 16 dye colors a banner layer can use.
///
/// The discriminant is the color's ordinal in the compact banner code
/// (`White = 0` through `Black = 15`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    White = 0,
    Orange = 1,
    Magenta = 2,
    LightBlue = 3,
    Yellow = 4,
    Lime = 5,
    Pink = 6,
    Gray = 7,
    LightGray = 8,
    Cyan = 9,
    Purple = 10,
    Blue = 11,
    Brown = 12,
    Green = 13,
    Red = 14,
    Black = 15,
}

/// All colors, in banner-code ordinal order.
pub const ALL_COLORS: [Color; 16] = [
    Color::White,
    Color::Orange,
    Color::Magenta,
    Color::LightBlue,
    Color::Yellow,
    Color::Lime,
    Color::Pink,
    Color::Gray,
    Color::LightGray,
    Color::Cyan,
    Color::Purple,
    Color::Blue,
    Color::Brown,
    Color::Green,
    Color::Red,
    Color::Black,
];

impl Color {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Orange => "Orange",
            Color::Magenta => "Magenta",
            Color::LightBlue => "Light Blue",
            Color::Yellow => "Yellow",
            Color::Lime => "Lime",
            Color::Pink => "Pink",
            Color::Gray => "Gray",
            Color::LightGray => "Light Gray",
            Color::Cyan => "Cyan",
            Color::Purple => "Purple",
            Color::Blue => "Blue",
            Color::Brown => "Brown",
            Color::Green => "Green",
            Color::Red => "Red",
            Color::Black => "Black",
        }
    }

    /// Ordinal used as the digit run in the compact banner code.
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Index into the private-use-area font block (and the atlas column).
    ///
    /// This ordering differs from the banner-code ordinal: the font groups
    /// colors by brightness, not by dye id.
    pub fn unicode_index(self) -> u32 {
        match self {
            Color::White => 0,
            Color::LightGray => 1,
            Color::Gray => 2,
            Color::Black => 3,
            Color::Yellow => 4,
            Color::Orange => 5,
            Color::Red => 6,
            Color::Brown => 7,
            Color::Lime => 8,
            Color::Green => 9,
            Color::LightBlue => 10,
            Color::Cyan => 11,
            Color::Blue => 12,
            Color::Pink => 13,
            Color::Magenta => 14,
            Color::Purple => 15,
        }
    }

    /// Color-change token in banner-writer URLs.
    pub fn writer_index(self) -> char {
        match self {
            Color::White => '0',
            Color::LightGray => '1',
            Color::Gray => '2',
            Color::Black => '3',
            Color::Yellow => '4',
            Color::Orange => '5',
            Color::Red => '6',
            Color::Brown => '7',
            Color::Lime => '8',
            Color::Green => '9',
            Color::LightBlue => 'A',
            Color::Cyan => 'B',
            Color::Blue => 'C',
            Color::Pink => 'D',
            Color::Magenta => 'E',
            Color::Purple => 'F',
        }
    }

    /// Color token in planetminecraft banner URLs.
    pub fn planetminecraft_index(self) -> char {
        match self {
            Color::White => 'g',
            Color::LightGray => '8',
            Color::Gray => '9',
            Color::Black => '1',
            Color::Yellow => 'c',
            Color::Orange => 'f',
            Color::Red => '2',
            Color::Brown => '4',
            Color::Lime => 'b',
            Color::Green => '3',
            Color::LightBlue => 'd',
            Color::Cyan => '7',
            Color::Blue => '5',
            Color::Pink => 'a',
            Color::Magenta => 'e',
            Color::Purple => '6',
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        ALL_COLORS.iter().copied().find(|c| c.ordinal() == ordinal)
    }

    pub fn from_unicode_index(index: u32) -> Option<Self> {
        ALL_COLORS
            .iter()
            .copied()
            .find(|c| c.unicode_index() == index)
    }

    pub fn from_writer_index(ch: char) -> Option<Self> {
        ALL_COLORS.iter().copied().find(|c| c.writer_index() == ch)
    }

    pub fn from_planetminecraft_index(ch: char) -> Option<Self> {
        ALL_COLORS
            .iter()
            .copied()
            .find(|c| c.planetminecraft_index() == ch)
    }
}

/// The 41 banner patterns.
///
/// `Pattern::Banner` is the reserved base sentinel: it marks the background
/// fill of a banner and must never appear among the non-base layers. The
/// discriminant is the pattern's row in the sprite atlas and its ordinal in
/// the internal font encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    Banner = 0,
    Bordure = 1,
    FieldMasoned = 2,
    Roundel = 3,
    CreeperCharge = 4,
    Saltire = 5,
    BordureIndented = 6,
    PerBendSinister = 7,
    PerBend = 8,
    PerBendInverted = 9,
    PerBendSinisterInverted = 10,
    FlowerCharge = 11,
    Globe = 12,
    Gradient = 13,
    BaseGradient = 14,
    PerFess = 15,
    PerFessInverted = 16,
    PerPale = 17,
    PerPaleInverted = 18,
    Thing = 19,
    Snout = 20,
    Lozenge = 21,
    SkullCharge = 22,
    Paly = 23,
    BaseDexterCanton = 24,
    BaseSinisterCanton = 25,
    ChiefDexterCanton = 26,
    ChiefSinisterCanton = 27,
    Cross = 28,
    Base = 29,
    Pale = 30,
    BendSinister = 31,
    Bend = 32,
    PaleDexter = 33,
    Fess = 34,
    PaleSinister = 35,
    Chief = 36,
    Chevron = 37,
    InvertedChevron = 38,
    BaseIndented = 39,
    ChiefIndented = 40,
}

/// All patterns, in ordinal order.
pub const ALL_PATTERNS: [Pattern; 41] = [
    Pattern::Banner,
    Pattern::Bordure,
    Pattern::FieldMasoned,
    Pattern::Roundel,
    Pattern::CreeperCharge,
    Pattern::Saltire,
    Pattern::BordureIndented,
    Pattern::PerBendSinister,
    Pattern::PerBend,
    Pattern::PerBendInverted,
    Pattern::PerBendSinisterInverted,
    Pattern::FlowerCharge,
    Pattern::Globe,
    Pattern::Gradient,
    Pattern::BaseGradient,
    Pattern::PerFess,
    Pattern::PerFessInverted,
    Pattern::PerPale,
    Pattern::PerPaleInverted,
    Pattern::Thing,
    Pattern::Snout,
    Pattern::Lozenge,
    Pattern::SkullCharge,
    Pattern::Paly,
    Pattern::BaseDexterCanton,
    Pattern::BaseSinisterCanton,
    Pattern::ChiefDexterCanton,
    Pattern::ChiefSinisterCanton,
    Pattern::Cross,
    Pattern::Base,
    Pattern::Pale,
    Pattern::BendSinister,
    Pattern::Bend,
    Pattern::PaleDexter,
    Pattern::Fess,
    Pattern::PaleSinister,
    Pattern::Chief,
    Pattern::Chevron,
    Pattern::InvertedChevron,
    Pattern::BaseIndented,
    Pattern::ChiefIndented,
];

impl Pattern {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Banner => "Banner",
            Pattern::Bordure => "Bordure",
            Pattern::FieldMasoned => "Field Masoned",
            Pattern::Roundel => "Roundel",
            Pattern::CreeperCharge => "Creeper Charge",
            Pattern::Saltire => "Saltire",
            Pattern::BordureIndented => "Bordure Indented",
            Pattern::PerBendSinister => "Per Bend Sinister",
            Pattern::PerBend => "Per Bend",
            Pattern::PerBendInverted => "Per Bend Inverted",
            Pattern::PerBendSinisterInverted => "Per Bend Sinister Inverted",
            Pattern::FlowerCharge => "Flower Charge",
            Pattern::Globe => "Globe",
            Pattern::Gradient => "Gradient",
            Pattern::BaseGradient => "Base Gradient",
            Pattern::PerFess => "Per Fess",
            Pattern::PerFessInverted => "Per Fess Inverted",
            Pattern::PerPale => "Per Pale",
            Pattern::PerPaleInverted => "Per Pale Inverted",
            Pattern::Thing => "Thing",
            Pattern::Snout => "Snout",
            Pattern::Lozenge => "Lozenge",
            Pattern::SkullCharge => "Skull Charge",
            Pattern::Paly => "Paly",
            Pattern::BaseDexterCanton => "Base Dexter Canton",
            Pattern::BaseSinisterCanton => "Base Sinister Canton",
            Pattern::ChiefDexterCanton => "Chief Dexter Canton",
            Pattern::ChiefSinisterCanton => "Chief Sinister Canton",
            Pattern::Cross => "Cross",
            Pattern::Base => "Base",
            Pattern::Pale => "Pale",
            Pattern::BendSinister => "Bend Sinister",
            Pattern::Bend => "Bend",
            Pattern::PaleDexter => "Pale Dexter",
            Pattern::Fess => "Fess",
            Pattern::PaleSinister => "Pale Sinister",
            Pattern::Chief => "Chief",
            Pattern::Chevron => "Chevron",
            Pattern::InvertedChevron => "Inverted Chevron",
            Pattern::BaseIndented => "Base Indented",
            Pattern::ChiefIndented => "Chief Indented",
        }
    }

    /// Unicode lookalike glyph, for plain-text descriptions of a layer.
    pub fn glyph(self) -> &'static str {
        match self {
            Pattern::Banner => "█",
            Pattern::Base => "▁",
            Pattern::Chief => "▔",
            Pattern::PaleDexter => "▏",
            Pattern::PaleSinister => "▕",
            Pattern::Fess => "-",
            Pattern::Pale => "|",
            Pattern::Bend => "\\",
            Pattern::BendSinister => "/",
            Pattern::Saltire => "X",
            Pattern::Paly => "ꘈ",
            Pattern::Cross => "+",
            Pattern::PerBend => "◥",
            Pattern::PerBendSinister => "◤",
            Pattern::PerBendInverted => "◣",
            Pattern::PerBendSinisterInverted => "◢",
            Pattern::PerPale => "▌",
            Pattern::PerPaleInverted => "▐",
            Pattern::PerFess => "▀",
            Pattern::PerFessInverted => "▄",
            Pattern::BaseDexterCanton => "▖",
            Pattern::BaseSinisterCanton => "▗",
            Pattern::ChiefDexterCanton => "▘",
            Pattern::ChiefSinisterCanton => "▝",
            Pattern::Chevron => "▲",
            Pattern::InvertedChevron => "▼",
            Pattern::BaseIndented => "⏟",
            Pattern::ChiefIndented => "⏞",
            Pattern::Roundel => "●",
            Pattern::Lozenge => "◆",
            Pattern::Bordure => "◻",
            Pattern::BordureIndented => "▩",
            Pattern::FieldMasoned => "▤",
            Pattern::CreeperCharge => "⍨",
            Pattern::SkullCharge => "⍚",
            Pattern::FlowerCharge => "⌾",
            Pattern::Thing => "ᕧ",
            Pattern::Globe => "⬡",
            Pattern::Snout => "🀹",
            Pattern::Gradient => "⏷",
            Pattern::BaseGradient => "⏶",
        }
    }

    /// Atlas row / font ordinal.
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Letter token in the compact banner code (the in-game data value).
    pub fn data_value(self) -> &'static str {
        match self {
            Pattern::Banner => "b",
            Pattern::Base => "bs",
            Pattern::Chief => "ts",
            Pattern::PaleDexter => "ls",
            Pattern::PaleSinister => "rs",
            Pattern::Pale => "cs",
            Pattern::Fess => "ms",
            Pattern::Bend => "drs",
            Pattern::BendSinister => "dls",
            Pattern::Paly => "ss",
            Pattern::Saltire => "cr",
            Pattern::Cross => "sc",
            Pattern::PerBendSinister => "ld",
            Pattern::PerBend => "rud",
            Pattern::PerBendInverted => "lud",
            Pattern::PerBendSinisterInverted => "rd",
            Pattern::PerPale => "vh",
            Pattern::PerPaleInverted => "vhr",
            Pattern::PerFess => "hh",
            Pattern::PerFessInverted => "hhb",
            Pattern::BaseDexterCanton => "bl",
            Pattern::BaseSinisterCanton => "br",
            Pattern::ChiefDexterCanton => "tl",
            Pattern::ChiefSinisterCanton => "tr",
            Pattern::Chevron => "bt",
            Pattern::InvertedChevron => "tt",
            Pattern::BaseIndented => "bts",
            Pattern::ChiefIndented => "tts",
            Pattern::Roundel => "mc",
            Pattern::Lozenge => "mr",
            Pattern::Bordure => "bo",
            Pattern::BordureIndented => "cbo",
            Pattern::FieldMasoned => "bri",
            Pattern::Gradient => "gra",
            Pattern::BaseGradient => "gru",
            Pattern::CreeperCharge => "cre",
            Pattern::SkullCharge => "sku",
            Pattern::FlowerCharge => "flo",
            Pattern::Thing => "moj",
            Pattern::Globe => "glb",
            Pattern::Snout => "pig",
        }
    }

    /// Pattern token in banner-writer URLs. `.` is the base sentinel.
    pub fn writer_index(self) -> char {
        match self {
            Pattern::Banner => '.',
            Pattern::Bordure => 'G',
            Pattern::FieldMasoned => 'H',
            Pattern::Roundel => 'I',
            Pattern::CreeperCharge => 'J',
            Pattern::Saltire => 'K',
            Pattern::BordureIndented => 'L',
            Pattern::PerBendSinister => 'M',
            Pattern::PerBend => 'N',
            Pattern::PerBendInverted => 'O',
            Pattern::PerBendSinisterInverted => 'P',
            Pattern::FlowerCharge => 'Q',
            Pattern::Globe => 'R',
            Pattern::Gradient => 'S',
            Pattern::BaseGradient => 'T',
            Pattern::PerFess => 'U',
            Pattern::PerFessInverted => 'V',
            Pattern::PerPale => 'W',
            Pattern::PerPaleInverted => 'X',
            Pattern::Thing => 'Y',
            Pattern::Snout => 'Z',
            Pattern::Lozenge => 'a',
            Pattern::SkullCharge => 'b',
            Pattern::Paly => 'c',
            Pattern::BaseDexterCanton => 'd',
            Pattern::BaseSinisterCanton => 'e',
            Pattern::ChiefDexterCanton => 'f',
            Pattern::ChiefSinisterCanton => 'g',
            Pattern::Cross => 'h',
            Pattern::Base => 'i',
            Pattern::Pale => 'j',
            Pattern::BendSinister => 'k',
            Pattern::Bend => 'l',
            Pattern::PaleDexter => 'm',
            Pattern::Fess => 'n',
            Pattern::PaleSinister => 'o',
            Pattern::Chief => 'p',
            Pattern::Chevron => 'q',
            Pattern::InvertedChevron => 'r',
            Pattern::BaseIndented => 's',
            Pattern::ChiefIndented => 't',
        }
    }

    /// Pattern token in planetminecraft URLs. The base sentinel has no
    /// token: that service encodes the background as a bare color char.
    pub fn planetminecraft_index(self) -> Option<char> {
        match self {
            Pattern::Banner => None,
            Pattern::Base => Some('o'),
            Pattern::Chief => Some('v'),
            Pattern::PaleDexter => Some('s'),
            Pattern::PaleSinister => Some('u'),
            Pattern::Fess => Some('t'),
            Pattern::Pale => Some('p'),
            Pattern::Bend => Some('r'),
            Pattern::BendSinister => Some('q'),
            Pattern::Saltire => Some('7'),
            Pattern::Paly => Some('i'),
            Pattern::Cross => Some('n'),
            Pattern::PerBend => Some('a'),
            Pattern::PerBendSinister => Some('9'),
            Pattern::PerBendInverted => Some('A'),
            Pattern::PerBendSinisterInverted => Some('B'),
            Pattern::PerPale => Some('e'),
            Pattern::PerPaleInverted => Some('E'),
            Pattern::PerFess => Some('d'),
            Pattern::PerFessInverted => Some('D'),
            Pattern::BaseDexterCanton => Some('j'),
            Pattern::BaseSinisterCanton => Some('k'),
            Pattern::ChiefDexterCanton => Some('l'),
            Pattern::ChiefSinisterCanton => Some('m'),
            Pattern::Chevron => Some('y'),
            Pattern::InvertedChevron => Some('z'),
            Pattern::BaseIndented => Some('w'),
            Pattern::ChiefIndented => Some('x'),
            Pattern::Roundel => Some('5'),
            Pattern::Lozenge => Some('g'),
            Pattern::Bordure => Some('3'),
            Pattern::BordureIndented => Some('8'),
            Pattern::FieldMasoned => Some('4'),
            Pattern::CreeperCharge => Some('6'),
            Pattern::SkullCharge => Some('h'),
            Pattern::FlowerCharge => Some('b'),
            Pattern::Thing => Some('f'),
            Pattern::Globe => Some('F'),
            Pattern::Snout => Some('G'),
            Pattern::Gradient => Some('c'),
            Pattern::BaseGradient => Some('C'),
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        ALL_PATTERNS
            .iter()
            .copied()
            .find(|p| p.ordinal() == ordinal)
    }

    pub fn from_data_value(token: &str) -> Option<Self> {
        ALL_PATTERNS
            .iter()
            .copied()
            .find(|p| p.data_value() == token)
    }

    pub fn from_writer_index(ch: char) -> Option<Self> {
        ALL_PATTERNS
            .iter()
            .copied()
            .find(|p| p.writer_index() == ch)
    }

    pub fn from_planetminecraft_index(ch: char) -> Option<Self> {
        ALL_PATTERNS
            .iter()
            .copied()
            .find(|p| p.planetminecraft_index() == Some(ch))
    }
}

/// Axis and sense for message layout.
///
/// Discriminants are chosen so that `value % 2 == 1` picks out the
/// horizontal axis (Right/Left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    pub fn is_horizontal(self) -> bool {
        (self as u32) % 2 == 1
    }

    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// Two directions are perpendicular when one is horizontal and the
    /// other vertical. Writing and newline directions must satisfy this.
    pub fn is_perpendicular_to(self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Right => "Right",
            Direction::Down => "Down",
            Direction::Left => "Left",
        }
    }
}
