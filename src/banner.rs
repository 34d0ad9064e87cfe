//! Banner model and the codecs between it and its external representations
//!
//! A banner is a base color plus an ordered stack of pattern layers,
//! rendered back-to-front. Four textual encodings round-trip through this
//! type: the in-game font text, the compact banner code, and the two
//! banner-service URL formats. Decoders construct a fresh banner or fail;
//! they never mutate an existing one.

use std::sync::OnceLock;

use image::imageops::overlay;
use image::RgbaImage;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::DecodeError;
use crate::layer::Layer;
use crate::palette::{Color, Pattern};
use crate::sprites::{SpriteAtlas, TILE_HEIGHT, TILE_WIDTH};

/// Joins layer characters in the display-text encoding. Outside the banner
/// font block, so it can never be mistaken for a layer.
pub const TEXT_SEPARATOR: char = '\u{CFFF7}';

const WRITER_IMAGE_PREFIX: &str = "https://banner-writer.web.app/image/";
const PLANETMINECRAFT_PREFIX: &str = "https://www.planetminecraft.com/banner/?b=";

/// Error type for layer edits on an existing banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Referenced layer index does not exist
    #[error("no layer at index {0}")]
    NoSuchLayer(usize),
    /// The base sentinel pattern is reserved for the background
    #[error("the background pattern cannot be added as a layer")]
    BaseAsLayer,
}

/// A banner design: background color plus ordered pattern layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Banner {
    base_color: Color,
    layers: Vec<Layer>,
}

fn banner_code_charset() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9]+$").unwrap())
}

fn banner_code_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-z]+[0-9]+").unwrap())
}

impl Banner {
    /// A plain banner with no pattern layers.
    pub fn solid(base_color: Color) -> Self {
        Self {
            base_color,
            layers: Vec::new(),
        }
    }

    /// Build a banner from its parts. Fails if any layer carries the base
    /// sentinel pattern.
    pub fn new(base_color: Color, layers: Vec<Layer>) -> Result<Self, EditError> {
        if layers.iter().any(|l| l.pattern == Pattern::Banner) {
            return Err(EditError::BaseAsLayer);
        }
        Ok(Self { base_color, layers })
    }

    pub fn base_color(&self) -> Color {
        self.base_color
    }

    /// The non-base layers, in render order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The effective layer stack: a synthetic base layer followed by the
    /// pattern layers. Built fresh on every call so it can never alias or
    /// go stale against the stored layer list.
    pub fn all_layers(&self) -> Vec<Layer> {
        let mut all = Vec::with_capacity(self.layers.len() + 1);
        all.push(Layer::new(self.base_color, Pattern::Banner));
        all.extend_from_slice(&self.layers);
        all
    }

    /// Append a pattern layer.
    pub fn push_layer(&mut self, layer: Layer) -> Result<(), EditError> {
        if layer.pattern == Pattern::Banner {
            return Err(EditError::BaseAsLayer);
        }
        self.layers.push(layer);
        Ok(())
    }

    /// Replace the layer at `index`.
    pub fn set_layer(&mut self, index: usize, layer: Layer) -> Result<(), EditError> {
        if layer.pattern == Pattern::Banner {
            return Err(EditError::BaseAsLayer);
        }
        let slot = self
            .layers
            .get_mut(index)
            .ok_or(EditError::NoSuchLayer(index))?;
        *slot = layer;
        Ok(())
    }

    /// Remove and return the layer at `index`.
    pub fn remove_layer(&mut self, index: usize) -> Result<Layer, EditError> {
        if index >= self.layers.len() {
            return Err(EditError::NoSuchLayer(index));
        }
        Ok(self.layers.remove(index))
    }

    /// Display-text encoding: every layer's font character joined by
    /// [`TEXT_SEPARATOR`].
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, layer) in self.all_layers().iter().enumerate() {
            if i > 0 {
                out.push(TEXT_SEPARATOR);
            }
            out.push(layer.character());
        }
        out
    }

    /// Compact banner code: concatenated layer fragments, no delimiter.
    /// Tokenization on decode relies on the digit-run boundaries.
    pub fn banner_code(&self) -> String {
        self.all_layers()
            .iter()
            .map(|layer| layer.banner_code())
            .collect()
    }

    /// Shareable planetminecraft URL for this design.
    pub fn planetminecraft_url(&self) -> String {
        let mut url = String::from(PLANETMINECRAFT_PREFIX);
        url.push(self.base_color.planetminecraft_index());
        for layer in &self.layers {
            // Layers never hold the base sentinel, so the part is present.
            if let Some(part) = layer.planetminecraft_part() {
                url.push_str(&part);
            }
        }
        url
    }

    /// Decode the display-text encoding. The input must have the exact
    /// shape `C sep C sep … C` and start with a background layer.
    pub fn from_text(text: &str) -> Result<Self, DecodeError> {
        let mut all_layers = Vec::new();
        for (i, ch) in text.chars().enumerate() {
            if i % 2 == 1 {
                if ch != TEXT_SEPARATOR {
                    return Err(DecodeError::MalformedText);
                }
            } else {
                all_layers.push(Layer::from_character(ch)?);
            }
        }
        // A trailing separator means the character count was even.
        if text.chars().count() % 2 == 0 && !text.is_empty() {
            return Err(DecodeError::MalformedText);
        }
        Self::from_all_layers(all_layers)
    }

    /// Decode the compact banner code. Tokens must tile the whole string.
    pub fn from_banner_code(code: &str) -> Result<Self, DecodeError> {
        if !banner_code_charset().is_match(code) {
            return Err(DecodeError::InvalidBannerCode(code.to_string()));
        }
        let mut all_layers = Vec::new();
        let mut last_end = 0;
        for token in banner_code_token().find_iter(code) {
            if token.start() != last_end {
                return Err(DecodeError::InvalidBannerCode(code.to_string()));
            }
            all_layers.push(Layer::from_banner_code_part(token.as_str())?);
            last_end = token.end();
        }
        if last_end != code.len() {
            return Err(DecodeError::InvalidBannerCode(code.to_string()));
        }
        Self::from_all_layers(all_layers)
    }

    /// Decode a banner-writer image URL.
    ///
    /// The payload carries one color-change token per color *switch* only;
    /// layers inherit the current color, which starts at white. Space and
    /// newline controls are valid in message URLs but not in a
    /// single-banner one.
    pub fn from_writer_url(url: &str) -> Result<Self, DecodeError> {
        let rest = url.strip_prefix(WRITER_IMAGE_PREFIX).ok_or_else(|| {
            DecodeError::MalformedUrl {
                service: "banner-writer",
                detail: format!("missing {WRITER_IMAGE_PREFIX:?} prefix"),
            }
        })?;
        let mut chars = rest.chars();
        match chars.next() {
            Some('L') | Some('R') => {}
            other => {
                return Err(DecodeError::MalformedUrl {
                    service: "banner-writer",
                    detail: format!("expected direction L or R, found {other:?}"),
                })
            }
        }
        let payload = chars
            .as_str()
            .strip_suffix(".png")
            .ok_or_else(|| DecodeError::MalformedUrl {
                service: "banner-writer",
                detail: "missing .png suffix".to_string(),
            })?;

        let mut current_color = Color::White;
        let mut all_layers = Vec::new();
        for ch in payload.chars() {
            if let Some(color) = Color::from_writer_index(ch) {
                current_color = color;
            } else if let Some(pattern) = Pattern::from_writer_index(ch) {
                all_layers.push(Layer::new(current_color, pattern));
            } else if ch == '_' || ch == '~' {
                return Err(DecodeError::UnexpectedControl(ch));
            } else {
                return Err(DecodeError::InvalidUrlChar(ch));
            }
        }
        Self::from_all_layers(all_layers)
    }

    /// Decode a planetminecraft banner URL.
    pub fn from_planetminecraft_url(url: &str) -> Result<Self, DecodeError> {
        let payload = url.strip_prefix(PLANETMINECRAFT_PREFIX).ok_or_else(|| {
            DecodeError::MalformedUrl {
                service: "planetminecraft",
                detail: format!("missing {PLANETMINECRAFT_PREFIX:?} prefix"),
            }
        })?;
        let chars: Vec<char> = payload.chars().collect();
        let base_char = *chars.first().ok_or(DecodeError::Empty)?;
        let base_color = Color::from_planetminecraft_index(base_char)
            .ok_or(DecodeError::InvalidUrlChar(base_char))?;
        let mut layers = Vec::new();
        for pair in chars[1..].chunks(2) {
            let part: String = pair.iter().collect();
            layers.push(Layer::from_planetminecraft_part(&part)?);
        }
        if layers.iter().any(|l| l.pattern == Pattern::Banner) {
            return Err(DecodeError::DuplicateBase);
        }
        Ok(Self { base_color, layers })
    }

    /// Decode any supported banner URL, dispatching on its prefix.
    pub fn from_url(url: &str) -> Result<Self, DecodeError> {
        if url.starts_with(WRITER_IMAGE_PREFIX) {
            Self::from_writer_url(url)
        } else if url.starts_with(PLANETMINECRAFT_PREFIX) {
            Self::from_planetminecraft_url(url)
        } else {
            Err(DecodeError::UnknownUrl(url.to_string()))
        }
    }

    /// Shared tail of the decoders: the first decoded layer must be the
    /// background, and the sentinel must not appear again.
    fn from_all_layers(mut all_layers: Vec<Layer>) -> Result<Self, DecodeError> {
        if all_layers.is_empty() {
            return Err(DecodeError::Empty);
        }
        let base = all_layers.remove(0);
        if base.pattern != Pattern::Banner {
            return Err(DecodeError::MissingBase);
        }
        if all_layers.iter().any(|l| l.pattern == Pattern::Banner) {
            return Err(DecodeError::DuplicateBase);
        }
        Ok(Self {
            base_color: base.color,
            layers: all_layers,
        })
    }

    /// Alpha-composite every layer's sprite onto one transparent tile.
    pub fn render(&self, atlas: &SpriteAtlas) -> RgbaImage {
        let mut canvas = RgbaImage::new(TILE_WIDTH, TILE_HEIGHT);
        for layer in self.all_layers() {
            overlay(&mut canvas, atlas.sprite(layer), 0, 0);
        }
        canvas
    }

    /// Multi-line plain-text description: every encoding plus the layer
    /// stack with display names and lookalike glyphs.
    pub fn description(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Text: {}\n", self.text()));
        out.push_str(&format!("Banner code: {}\n", self.banner_code()));
        out.push_str(&format!("URL: {}\n", self.planetminecraft_url()));
        out.push_str("Layers:\n");
        for (i, layer) in self.all_layers().iter().enumerate() {
            out.push_str(&format!("{i}. {} {}\n", layer.describe(), layer.character()));
        }
        out
    }
}

impl From<Banner> for String {
    fn from(banner: Banner) -> String {
        banner.banner_code()
    }
}

impl TryFrom<String> for Banner {
    type Error = DecodeError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Banner::from_banner_code(&code)
    }
}
