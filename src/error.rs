//! Decode failures shared by the layer and banner codecs
//!
//! Every variant carries the offending character/token/fragment so callers
//! can build a diagnostic without re-parsing the input. Decoders fail fast:
//! a `DecodeError` means no partially-built banner escaped.

use thiserror::Error;

/// Error type for parsing any external banner representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Character is outside the private-use banner font block
    #[error("character U+{0:04X} is outside the banner font range")]
    CharOutOfRange(u32),
    /// Low byte of a font character doesn't decode to a pattern ordinal
    #[error("no pattern for font offset {0:#x}")]
    UnknownPatternOffset(u32),
    /// Derived color index has no palette entry
    #[error("no color indexed {0}")]
    UnknownColorIndex(u32),
    /// Display text isn't alternating layer characters and separators
    #[error("malformed banner text (expected characters joined by the banner separator)")]
    MalformedText,
    /// Banner code contains characters outside `[a-z0-9]`
    #[error("invalid banner code: {0:?}")]
    InvalidBannerCode(String),
    /// A banner-code token isn't a letter run followed by a digit run
    #[error("invalid banner code part: {0:?}")]
    InvalidCodePart(String),
    /// Letter run of a banner-code token matches no pattern
    #[error("unknown pattern token: {0:?}")]
    UnknownPatternToken(String),
    /// Digit run of a banner-code token matches no color ordinal
    #[error("unknown color ordinal: {0:?}")]
    UnknownColorToken(String),
    /// Decoded nothing at all
    #[error("representation decodes to an empty banner")]
    Empty,
    /// First decoded layer must carry the base sentinel pattern
    #[error("banner does not start with a background layer")]
    MissingBase,
    /// The base sentinel pattern appeared again after the background
    #[error("banner contains more than one background layer")]
    DuplicateBase,
    /// URL doesn't carry a known service prefix
    #[error("unrecognized banner URL: {0:?}")]
    UnknownUrl(String),
    /// URL prefix matched but the shape is wrong (direction char, suffix)
    #[error("malformed {service} URL: {detail}")]
    MalformedUrl {
        service: &'static str,
        detail: String,
    },
    /// A single-banner writer URL contained a space or newline control
    #[error("banner URL contains a space or newline control character {0:?}")]
    UnexpectedControl(char),
    /// A URL payload character matches no palette alphabet
    #[error("invalid character {0:?} in banner URL")]
    InvalidUrlChar(char),
}
