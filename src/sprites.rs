//! Sprite atlas: slices the banner spritesheet into per-layer tiles
//!
//! The sheet has a fixed layout: 41 pattern rows by 16 color columns of
//! 40x40 cells, with the visible sprite occupying the left 20x40 half of
//! each cell. Loading is fail-fast and happens once at startup; afterwards
//! the atlas is a read-only lookup.

use std::path::Path;

use image::imageops::crop_imm;
use image::RgbaImage;
use thiserror::Error;

use crate::layer::Layer;
use crate::palette::{ALL_COLORS, ALL_PATTERNS};

/// Width of one banner sprite in pixels.
pub const TILE_WIDTH: u32 = 20;
/// Height of one banner sprite in pixels.
pub const TILE_HEIGHT: u32 = 40;

/// Cell pitch in the spritesheet (sprites sit in the left half).
const CELL_SIZE: u32 = 40;
const SHEET_COLS: u32 = ALL_COLORS.len() as u32;
const SHEET_ROWS: u32 = ALL_PATTERNS.len() as u32;

/// Error type for atlas loading failures.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// Spritesheet file could not be read or decoded
    #[error("failed to load spritesheet: {0}")]
    Image(#[from] image::ImageError),
    /// Spritesheet is smaller than the fixed layout requires
    #[error("spritesheet is {width}x{height}, expected at least {expected_width}x{expected_height}")]
    TooSmall {
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },
}

/// Read-only `[pattern][color]` table of banner sprites.
pub struct SpriteAtlas {
    tiles: Vec<Vec<RgbaImage>>,
}

impl SpriteAtlas {
    /// Load and slice a spritesheet from disk.
    pub fn load(path: &Path) -> Result<Self, AtlasError> {
        let sheet = image::open(path)?.into_rgba8();
        Self::from_image(&sheet)
    }

    /// Slice an in-memory spritesheet.
    pub fn from_image(sheet: &RgbaImage) -> Result<Self, AtlasError> {
        let expected_width = SHEET_COLS * CELL_SIZE;
        let expected_height = SHEET_ROWS * CELL_SIZE;
        if sheet.width() < expected_width || sheet.height() < expected_height {
            return Err(AtlasError::TooSmall {
                width: sheet.width(),
                height: sheet.height(),
                expected_width,
                expected_height,
            });
        }
        let mut tiles = Vec::with_capacity(SHEET_ROWS as usize);
        for row in 0..SHEET_ROWS {
            let mut row_tiles = Vec::with_capacity(SHEET_COLS as usize);
            for col in 0..SHEET_COLS {
                let tile = crop_imm(
                    sheet,
                    col * CELL_SIZE,
                    row * CELL_SIZE,
                    TILE_WIDTH,
                    TILE_HEIGHT,
                )
                .to_image();
                row_tiles.push(tile);
            }
            tiles.push(row_tiles);
        }
        Ok(Self { tiles })
    }

    /// Sprite for one layer, indexed `[pattern ordinal][color unicode index]`.
    pub fn sprite(&self, layer: Layer) -> &RgbaImage {
        &self.tiles[layer.pattern.ordinal() as usize][layer.color.unicode_index() as usize]
    }
}
