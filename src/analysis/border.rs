//! Mean border colors of tile sides

use crate::color::Color;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::side::Side;
use crate::spatial::tile::Tile;
use ndarray::{Axis, Slice};

/// Mean color of the border strip of `thickness` pixels on one side of a tile
///
/// Channel sums over the strip are divided by the tile's full pixel count
/// rather than the strip's. Every strip of a run is scaled the same way, so
/// comparisons between strips stay meaningful even though the result is not
/// the true average color of the strip.
///
/// # Errors
///
/// Returns an error if the thickness is zero or larger than the tile
/// dimension the strip extends into
pub fn mean_border_color(tile: &Tile, side: Side, thickness: usize) -> Result<Color> {
    let (width, height) = (tile.width(), tile.height());
    let bounds = side
        .strip_bounds(width, height, thickness)
        .ok_or_else(|| {
            invalid_parameter(
                "border_thickness",
                &thickness,
                &format!("does not fit the {side} side of a {width}x{height} tile"),
            )
        })?;

    let pixels = tile.pixels();
    let rows = pixels.slice_axis(Axis(0), Slice::from(bounds.rows));
    let strip = rows.slice_axis(Axis(1), Slice::from(bounds.columns));
    let sums = strip.sum_axis(Axis(0)).sum_axis(Axis(0));
    let scale = tile.pixel_count() as f64;

    Ok(Color::new(
        sums.get(0).copied().unwrap_or(0.0) / scale,
        sums.get(1).copied().unwrap_or(0.0) / scale,
        sums.get(2).copied().unwrap_or(0.0) / scale,
    ))
}

/// Mean border colors of all four sides of one tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderProfile {
    colors: [Color; 4],
}

impl BorderProfile {
    /// Sample all four sides of a tile
    ///
    /// # Errors
    ///
    /// Returns an error if the thickness does not fit the tile
    pub fn sample(tile: &Tile, thickness: usize) -> Result<Self> {
        let mut colors = [Color::default(); 4];
        for (slot, side) in colors.iter_mut().zip(Side::ALL) {
            *slot = mean_border_color(tile, side, thickness)?;
        }
        Ok(Self { colors })
    }

    /// Mean color of one side
    pub fn side(&self, side: Side) -> Color {
        self.colors.get(side.index()).copied().unwrap_or_default()
    }
}
