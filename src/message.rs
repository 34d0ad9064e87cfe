//! Message composition: from free text to a banner grid, pixels, and the
//! compact export encodings
//!
//! A message is a 2D grid of optional banners (ragged rows, `None` for an
//! empty cell). The compositor places every cell according to the writing
//! and newline directions, which must lie on perpendicular axes: four
//! directions each leave 8 valid pairs, and "lines" become visual columns
//! when the writing direction is vertical.
//!
//! The two export encodings consume the same grid but target external
//! media with their own limitations; those surface as [`Unsupported`]
//! values with user-facing messages, never as generic failures.

use image::imageops::{overlay, resize, FilterType};
use image::RgbaImage;
use thiserror::Error;

use crate::banner::Banner;
use crate::layer::Layer;
use crate::palette::{Color, Direction};
use crate::set::BannerSet;
use crate::split::split;
use crate::sprites::{SpriteAtlas, TILE_HEIGHT, TILE_WIDTH};

/// A message laid out as lines of optional banner cells.
pub type BannerGrid = Vec<Vec<Option<Banner>>>;

/// First codepoint of the anvil cursor-jump escape range.
const JUMP_BASE: i64 = 0xD0000;
/// Encoded horizontal distance per cell of cursor movement.
const JUMP_STEP: i64 = 9;

const WRITER_EXPORT_PREFIX: &str = "banner-writer.web.app/?writing=";

/// Error type for turning message text into a banner grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// A word resolved to a name the set doesn't contain
    #[error("the banner set has no banner named {0:?}")]
    UnknownBanner(String),
    /// No decomposition of the word into known names exists
    #[error("could not split {0:?} into known banner names")]
    NoSplit(String),
}

/// Error type for pixel layout failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Writing and newline directions must be perpendicular
    #[error("writing direction {writing} and newline direction {newline} are not perpendicular")]
    NotPerpendicular {
        writing: &'static str,
        newline: &'static str,
    },
    /// Scale factor must be positive
    #[error("scale must be positive")]
    ZeroScale,
}

/// A target format genuinely cannot represent the requested layout. These
/// are documented limitations of the external media, not failures; callers
/// show the message instead of a URL or text run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unsupported {
    #[error("banner writer does not currently support vertical writing directions")]
    WriterVerticalWriting,
    #[error("banner writer only supports downward newlines in multi-line messages")]
    WriterNewlineDirection,
    #[error("anvil-optimized text does not support vertical writing directions")]
    AnvilVerticalWriting,
    #[error("anvil cursor jump distance is out of encodable range")]
    AnvilJumpRange,
}

/// Rendering knobs for [`render_message`], all in output pixels except
/// `scale`, which multiplies the 20x40 tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub scale: u32,
    pub margin: u32,
    pub spacing: u32,
}

impl RenderOptions {
    /// Defaults at a given scale: margin and spacing both 4x the scale.
    pub fn for_scale(scale: u32) -> Self {
        Self {
            scale,
            margin: 4 * scale,
            spacing: 4 * scale,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::for_scale(2)
    }
}

/// Compact anvil-ready text plus its cost in the anvil's length budget
/// (jumps cost 2, characters 1). The budget check itself belongs to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnvilText {
    pub text: String,
    pub length: usize,
}

/// Turn message text into a banner grid using a set's delimiters, split
/// policy, and stored designs.
///
/// Lines are split on the set's newline character, words on its space
/// character, and words further on plain whitespace; one empty cell
/// separates adjacent words. Each subword is decomposed by the set's split
/// mode and every resulting name resolved against the set.
pub fn compose(text: &str, set: &BannerSet) -> Result<BannerGrid, ComposeError> {
    let names = set.names();
    let mut grid: BannerGrid = Vec::new();
    for line in text.split(set.newline_char()) {
        let mut cells: Vec<Option<Banner>> = Vec::new();
        for (i, word) in line.split(set.space_char()).enumerate() {
            if i > 0 {
                cells.push(None);
            }
            for subword in word.split_whitespace() {
                let parts = split(set.split_mode(), subword, &names).ok_or_else(|| {
                    ComposeError::NoSplit(subword.to_string())
                })?;
                for part in parts {
                    let banner = set
                        .banner(&part)
                        .ok_or_else(|| ComposeError::UnknownBanner(part.clone()))?;
                    cells.push(Some(banner.clone()));
                }
            }
        }
        grid.push(cells);
    }
    Ok(grid)
}

/// Resolve one logical index to a physical position along its axis.
/// Returns the position and whether it lies on the row axis.
fn place(direction: Direction, index: u32, rows: u32, cols: u32) -> (bool, u32) {
    match direction {
        Direction::Up => (true, rows - 1 - index),
        Direction::Down => (true, index),
        Direction::Left => (false, cols - 1 - index),
        Direction::Right => (false, index),
    }
}

/// Render a banner grid to pixels.
///
/// Rows are padded to equal length; the grid's row/column counts swap
/// roles when the writing direction is vertical. Each banner is scaled
/// nearest-neighbor and alpha-composited at a position resolved
/// independently for its line (newline direction) and its cell within the
/// line (writing direction). Empty cells are skipped but still occupy
/// their slot.
pub fn render_message(
    grid: &BannerGrid,
    atlas: &SpriteAtlas,
    writing: Direction,
    newline: Direction,
    opts: &RenderOptions,
) -> Result<RgbaImage, LayoutError> {
    if !writing.is_perpendicular_to(newline) {
        return Err(LayoutError::NotPerpendicular {
            writing: writing.name(),
            newline: newline.name(),
        });
    }
    if opts.scale == 0 {
        return Err(LayoutError::ZeroScale);
    }

    let line_count = grid.len() as u32;
    let line_length = grid.iter().map(Vec::len).max().unwrap_or(0) as u32;
    let (mut image_rows, mut image_cols) = (line_count, line_length);
    if writing.is_vertical() {
        std::mem::swap(&mut image_rows, &mut image_cols);
    }

    let cell_width = TILE_WIDTH * opts.scale;
    let cell_height = TILE_HEIGHT * opts.scale;
    let width = image_cols * cell_width + 2 * opts.margin + opts.spacing * image_cols.saturating_sub(1);
    let height = image_rows * cell_height + 2 * opts.margin + opts.spacing * image_rows.saturating_sub(1);
    let mut image = RgbaImage::new(width.max(1), height.max(1));

    for (r, line) in grid.iter().enumerate() {
        let (line_on_rows, line_pos) = place(newline, r as u32, image_rows, image_cols);
        for (c, cell) in line.iter().enumerate() {
            let Some(banner) = cell else { continue };
            let (_, cell_pos) = place(writing, c as u32, image_rows, image_cols);
            let (paste_row, paste_col) = if line_on_rows {
                (line_pos, cell_pos)
            } else {
                (cell_pos, line_pos)
            };
            let x = paste_col * cell_width + opts.margin + opts.spacing * paste_col;
            let y = paste_row * cell_height + opts.margin + opts.spacing * paste_row;
            let tile = resize(
                &banner.render(atlas),
                cell_width,
                cell_height,
                FilterType::Nearest,
            );
            overlay(&mut image, &tile, i64::from(x), i64::from(y));
        }
    }
    Ok(image)
}

/// Derive the shareable banner-writer URL for a message.
///
/// The payload is written in writing order (each line reversed for
/// leftward writing), with `~` between lines, `_` for empty cells, and a
/// color token only where the running color changes; the running color
/// starts at white and carries across cells and lines.
pub fn writer_url(
    grid: &BannerGrid,
    writing: Direction,
    newline: Direction,
) -> Result<String, Unsupported> {
    if writing.is_vertical() {
        return Err(Unsupported::WriterVerticalWriting);
    }
    if newline != Direction::Down && grid.len() > 1 {
        return Err(Unsupported::WriterNewlineDirection);
    }

    let mut output = String::from(WRITER_EXPORT_PREFIX);
    output.push(if writing == Direction::Left { 'L' } else { 'R' });

    let mut color = Color::White;
    for (i, line) in grid.iter().enumerate() {
        if i > 0 {
            output.push('~');
        }
        let cells: Vec<&Option<Banner>> = if writing == Direction::Left {
            line.iter().rev().collect()
        } else {
            line.iter().collect()
        };
        for cell in cells {
            let Some(banner) = cell else {
                output.push('_');
                continue;
            };
            for layer in banner.all_layers() {
                if layer.color != color {
                    color = layer.color;
                    output.push(color.writer_index());
                }
                output.push(layer.pattern.writer_index());
            }
        }
    }
    Ok(output)
}

fn jump_char(cells: i64) -> Result<char, Unsupported> {
    let value = JUMP_BASE + JUMP_STEP * cells;
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .ok_or(Unsupported::AnvilJumpRange)
}

/// Derive the anvil-optimized text run for a message.
///
/// Anvils have no line concept, so lines are flattened into one sequence
/// with an empty cell between them (the whole sequence is reversed for
/// leftward writing). Banners are then typed one layer-depth at a time
/// across all cells, emitting a cursor-jump escape whenever the cursor is
/// not already on the right cell. A jump costs 2 length units, a layer
/// character 1; a lone short banner between two taller neighbors gets its
/// first layer repeated instead, which is cheaper than jumping around it.
pub fn anvil_text(grid: &BannerGrid, writing: Direction) -> Result<AnvilText, Unsupported> {
    if writing.is_vertical() {
        return Err(Unsupported::AnvilVerticalWriting);
    }

    let mut flattened: Vec<Option<&Banner>> = Vec::new();
    for (i, line) in grid.iter().enumerate() {
        if i > 0 {
            flattened.push(None);
        }
        flattened.extend(line.iter().map(Option::as_ref));
    }
    if writing == Direction::Left {
        flattened.reverse();
    }

    let mut cell_layers: Vec<Vec<Layer>> = flattened
        .iter()
        .map(|cell| cell.map(Banner::all_layers).unwrap_or_default())
        .collect();

    // Pad a sandwiched short banner up to its shorter neighbor's height.
    // Each repeated first layer costs 1, while jumping past the cell and
    // back costs 2 twice, so padding wins up to the neighbor height.
    for i in 0..cell_layers.len().saturating_sub(2) {
        let minimum = cell_layers[i].len().min(cell_layers[i + 2].len());
        let middle = &mut cell_layers[i + 1];
        if !middle.is_empty() && middle.len() < minimum {
            let first = middle[0];
            for _ in 0..minimum - middle.len() {
                middle.insert(0, first);
            }
        }
    }

    let mut text = String::new();
    let mut length = 0usize;
    let mut position: i64 = 0;
    let max_depth = cell_layers.iter().map(Vec::len).max().unwrap_or(0);
    for depth in 0..max_depth {
        for (pos, layers) in cell_layers.iter().enumerate() {
            let Some(layer) = layers.get(depth) else { continue };
            let pos = pos as i64;
            if position != pos {
                text.push(jump_char(pos - position)?);
                position = pos;
                length += 2;
            }
            text.push(layer.character());
            position += 1;
            length += 1;
        }
    }

    Ok(AnvilText { text, length })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Pattern;
    use crate::split::SplitMode;

    fn banner_with_depth(color: Color, depth: usize) -> Banner {
        let layers = vec![Layer::new(color, Pattern::Bordure); depth];
        Banner::new(color, layers).unwrap()
    }

    fn test_set(split_mode: SplitMode) -> BannerSet {
        let mut set =
            BannerSet::new(Direction::Right, Direction::Down, '-', '/', split_mode).unwrap();
        set.insert_banner("a", Banner::solid(Color::White)).unwrap();
        set.insert_banner("b", Banner::solid(Color::Black)).unwrap();
        set
    }

    #[test]
    fn test_compose_basic_message() {
        let set = test_set(SplitMode::No);
        let grid = compose("a-b", &set).unwrap();
        assert_eq!(
            grid,
            vec![vec![
                Some(Banner::solid(Color::White)),
                None,
                Some(Banner::solid(Color::Black)),
            ]]
        );
    }

    #[test]
    fn test_compose_newlines_and_unknown_names() {
        let set = test_set(SplitMode::No);
        let grid = compose("a/b", &set).unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(
            compose("a-q", &set),
            Err(ComposeError::UnknownBanner("q".to_string()))
        );
    }

    #[test]
    fn test_compose_splits_concatenated_names() {
        let set = test_set(SplitMode::Longest);
        let grid = compose("ab", &set).unwrap();
        assert_eq!(
            grid,
            vec![vec![
                Some(Banner::solid(Color::White)),
                Some(Banner::solid(Color::Black)),
            ]]
        );
        assert_eq!(
            compose("axb", &set),
            Err(ComposeError::NoSplit("axb".to_string()))
        );
    }

    #[test]
    fn test_writer_url_run_length_color_tokens() {
        // Two solid red banners: the color token is emitted once and
        // carries across both cells.
        let red = Banner::solid(Color::Red);
        let grid = vec![vec![Some(red.clone()), Some(red)]];
        let url = writer_url(&grid, Direction::Right, Direction::Down).unwrap();
        assert_eq!(url, "banner-writer.web.app/?writing=R6..");
    }

    #[test]
    fn test_writer_url_empty_cells_and_lines() {
        let white = Banner::solid(Color::White);
        let grid = vec![
            vec![Some(white.clone()), None],
            vec![Some(white)],
        ];
        let url = writer_url(&grid, Direction::Right, Direction::Down).unwrap();
        assert_eq!(url, "banner-writer.web.app/?writing=R._~.");
    }

    #[test]
    fn test_writer_url_reverses_lines_for_left_writing() {
        let grid = vec![vec![
            Some(Banner::solid(Color::White)),
            Some(Banner::solid(Color::Black)),
        ]];
        let url = writer_url(&grid, Direction::Left, Direction::Down).unwrap();
        // Black first: the line is emitted right-to-left.
        assert_eq!(url, "banner-writer.web.app/?writing=L3.0.");
    }

    #[test]
    fn test_writer_url_capability_limits() {
        let grid = vec![vec![Some(Banner::solid(Color::White))]];
        assert_eq!(
            writer_url(&grid, Direction::Down, Direction::Right),
            Err(Unsupported::WriterVerticalWriting)
        );
        let two_lines = vec![
            vec![Some(Banner::solid(Color::White))],
            vec![Some(Banner::solid(Color::White))],
        ];
        assert_eq!(
            writer_url(&two_lines, Direction::Right, Direction::Up),
            Err(Unsupported::WriterNewlineDirection)
        );
        // A single line tolerates any perpendicular newline direction.
        assert!(writer_url(&grid, Direction::Right, Direction::Up).is_ok());
    }

    #[test]
    fn test_anvil_single_banner_costs_one() {
        let grid = vec![vec![Some(Banner::solid(Color::White))]];
        let anvil = anvil_text(&grid, Direction::Right).unwrap();
        assert_eq!(anvil.length, 1);
        assert_eq!(anvil.text.chars().count(), 1);
    }

    #[test]
    fn test_anvil_gap_costs_a_jump() {
        // Banner, empty cell, banner: one jump (2) plus two characters.
        let white = Banner::solid(Color::White);
        let grid = vec![vec![Some(white.clone()), None, Some(white)]];
        let anvil = anvil_text(&grid, Direction::Right).unwrap();
        assert_eq!(anvil.length, 4);
        let chars: Vec<char> = anvil.text.chars().collect();
        assert_eq!(chars.len(), 3);
        // The jump skips the empty cell: distance +1 cell.
        assert_eq!(chars[1] as i64, JUMP_BASE + JUMP_STEP);
    }

    #[test]
    fn test_anvil_sandwich_padding_avoids_jumps() {
        // Layer-count profile [3, 1, 3]: the middle banner's single layer
        // is repeated twice so every depth pass walks straight through.
        // Unpadded this would cost 15 (two extra jumps around the middle
        // cell at each deeper pass); padded it costs 13: nine layer
        // characters plus one jump back per deeper pass.
        let grid = vec![vec![
            Some(banner_with_depth(Color::Red, 2)),
            Some(banner_with_depth(Color::White, 0)),
            Some(banner_with_depth(Color::Blue, 2)),
        ]];
        let anvil = anvil_text(&grid, Direction::Right).unwrap();
        assert_eq!(anvil.length, 13);
        assert_eq!(anvil.text.chars().count(), 11);
        // Only the two start-of-pass jumps remain.
        let jumps = anvil
            .text
            .chars()
            .filter(|&c| (c as u32) >= 0xF000)
            .count();
        assert_eq!(jumps, 2);
    }

    #[test]
    fn test_anvil_unoptimized_profile_still_jumps() {
        // Profile [1, 3]: nothing to pad; the second pass must jump back
        // to the taller banner twice.
        let grid = vec![vec![
            Some(banner_with_depth(Color::Red, 0)),
            Some(banner_with_depth(Color::Blue, 2)),
        ]];
        let anvil = anvil_text(&grid, Direction::Right).unwrap();
        // Depth 0: two chars. Depths 1 and 2: jump back + char each.
        assert_eq!(anvil.length, 2 + 2 * 3);
        // Backward jumps encode negative distances below the escape base.
        assert!(anvil.text.chars().any(|c| (c as i64) < JUMP_BASE && (c as i64) >= JUMP_BASE - 90));
    }

    #[test]
    fn test_anvil_flattens_lines_with_a_gap() {
        let white = Banner::solid(Color::White);
        let grid = vec![vec![Some(white.clone())], vec![Some(white)]];
        let anvil = anvil_text(&grid, Direction::Right).unwrap();
        // Two cells separated by an empty one: char, jump, char.
        assert_eq!(anvil.length, 4);
    }

    #[test]
    fn test_anvil_rejects_vertical_writing() {
        let grid = vec![vec![Some(Banner::solid(Color::White))]];
        assert_eq!(
            anvil_text(&grid, Direction::Up),
            Err(Unsupported::AnvilVerticalWriting)
        );
    }
}
