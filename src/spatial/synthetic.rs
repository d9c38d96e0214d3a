//! Seam-coded synthetic puzzles with a known solution
//!
//! Every seam between two adjacent tiles and every outer wall segment gets
//! its own gray level, painted on the middle band of the border strips that
//! touch it. The 5×5 corners of each tile are white, so two strips facing
//! each other across a seam have identical sums while every other pairing
//! differs by at least one gray level. Tile sides are limited to a range
//! where one gray level always moves the scaled strip mean by more than the
//! accuracy margin and all means share one branch of the Lab companding
//! curve.

use crate::io::configuration::BORDER_THICKNESS;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::slice_image;
use crate::spatial::grid::GridShape;
use image::{Rgb, RgbImage};

/// Smallest supported tile side in pixels
pub const MIN_TILE_SIZE: usize = 16;
/// Largest supported tile side in pixels
pub const MAX_TILE_SIZE: usize = 32;

const LOWEST_LEVEL: usize = 160;
const LEVEL_RANGE: usize = 90;
const CORNER: Rgb<u8> = Rgb([255, 255, 255]);

/// Gray-level assignment for every seam and wall of a grid
struct SeamPalette {
    shape: GridShape,
    step: usize,
}

impl SeamPalette {
    fn new(shape: GridShape) -> Result<Self> {
        let count = Self::class_count(shape);
        if count > LEVEL_RANGE + 1 {
            return Err(invalid_parameter(
                "shape",
                &shape,
                &format!(
                    "needs {count} distinct seam levels, at most {} available",
                    LEVEL_RANGE + 1
                ),
            ));
        }
        let step = (LEVEL_RANGE / count.saturating_sub(1).max(1)).max(1);
        Ok(Self { shape, step })
    }

    const fn class_count(shape: GridShape) -> usize {
        let horizontal = shape.rows * shape.cols.saturating_sub(1);
        let vertical = shape.rows.saturating_sub(1) * shape.cols;
        horizontal + vertical + 2 * shape.cols + 2 * shape.rows
    }

    fn level(&self, class: usize) -> Rgb<u8> {
        let value = (LOWEST_LEVEL + class * self.step).min(255) as u8;
        Rgb([value, value, value])
    }

    // Class ids: horizontal seams, vertical seams, then top, bottom, left, right walls
    fn band(&self, row: usize, col: usize, band: Band) -> Rgb<u8> {
        let GridShape { rows, cols } = self.shape;
        let horizontal = rows * cols.saturating_sub(1);
        let walls = horizontal + rows.saturating_sub(1) * cols;

        let class = match band {
            Band::Top if row == 0 => walls + col,
            Band::Top => horizontal + (row - 1) * cols + col,
            Band::Bottom if row == rows - 1 => walls + cols + col,
            Band::Bottom => horizontal + row * cols + col,
            Band::Left if col == 0 => walls + 2 * cols + row,
            Band::Left => row * (cols - 1) + col - 1,
            Band::Right if col == cols - 1 => walls + 2 * cols + rows + row,
            Band::Right => row * (cols - 1) + col,
        };
        self.level(class)
    }
}

#[derive(Clone, Copy)]
enum Band {
    Top,
    Bottom,
    Left,
    Right,
}

/// Render the full source image of a seam-coded puzzle
///
/// # Errors
///
/// Returns an error if:
/// - The tile size is outside `MIN_TILE_SIZE..=MAX_TILE_SIZE`
/// - The grid needs more seam levels than the palette provides
pub fn seam_image(shape: GridShape, tile_size: usize) -> Result<RgbImage> {
    if !(MIN_TILE_SIZE..=MAX_TILE_SIZE).contains(&tile_size) {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &format!("must be within {MIN_TILE_SIZE}..={MAX_TILE_SIZE}"),
        ));
    }
    let palette = SeamPalette::new(shape)?;

    let width = (shape.cols * tile_size) as u32;
    let height = (shape.rows * tile_size) as u32;
    let far = tile_size - BORDER_THICKNESS;

    Ok(RgbImage::from_fn(width, height, |x, y| {
        let (x, y) = (x as usize, y as usize);
        let (row, col) = (y / tile_size, x / tile_size);
        let (local_x, local_y) = (x % tile_size, y % tile_size);

        let across_rows = local_y < BORDER_THICKNESS || local_y >= far;
        let across_columns = local_x < BORDER_THICKNESS || local_x >= far;

        match (across_rows, across_columns) {
            (true, true) => CORNER,
            (true, false) if local_y < BORDER_THICKNESS => palette.band(row, col, Band::Top),
            (true, false) => palette.band(row, col, Band::Bottom),
            (false, true) if local_x < BORDER_THICKNESS => palette.band(row, col, Band::Left),
            (false, true) => palette.band(row, col, Band::Right),
            (false, false) => Rgb([
                (x * 255 / width as usize) as u8,
                (y * 255 / height as usize) as u8,
                ((row * shape.cols + col) * 37 % 256) as u8,
            ]),
        }
    }))
}

/// Seam-coded puzzle tiles in row-major (solved) order
///
/// # Errors
///
/// Returns an error if the image cannot be rendered, see [`seam_image`]
pub fn seam_tiles(shape: GridShape, tile_size: usize) -> Result<Vec<RgbImage>> {
    slice_image(&seam_image(shape, tile_size)?, shape)
}
