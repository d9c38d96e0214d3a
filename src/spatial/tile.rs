//! Immutable tile pixel buffers and the ordered tile set of one run

use crate::io::error::{ReassemblyError, Result, invalid_source};
use image::RgbImage;
use ndarray::{Array3, ArrayView3};

/// Number of color channels stored per pixel
pub const CHANNELS: usize = 3;

/// Pixel buffer of one tile, indexed `(y, x, channel)` with channels in 0.0-1.0
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pixels: Array3<f64>,
}

impl Tile {
    /// Wrap a normalized `(height, width, 3)` pixel array
    ///
    /// # Errors
    ///
    /// Returns an error if the array does not have exactly three channels
    /// or has a zero width or height
    pub fn from_array(pixels: Array3<f64>) -> Result<Self> {
        let (height, width, channels) = pixels.dim();
        if channels != CHANNELS {
            return Err(invalid_source(&format!(
                "tile has {channels} channels, expected {CHANNELS}"
            )));
        }
        if width == 0 || height == 0 {
            return Err(invalid_source(&"tile has no pixels"));
        }
        Ok(Self { pixels })
    }

    /// Convert an 8-bit RGB image into a normalized tile
    ///
    /// # Errors
    ///
    /// Returns an error if the image has a zero width or height
    pub fn from_rgb_image(image: &RgbImage) -> Result<Self> {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut pixels = Array3::zeros((height, width, CHANNELS));

        for (x, y, pixel) in image.enumerate_pixels() {
            for (c, &value) in pixel.0.iter().enumerate() {
                if let Some(slot) = pixels.get_mut((y as usize, x as usize, c)) {
                    *slot = f64::from(value) / 255.0;
                }
            }
        }

        Self::from_array(pixels)
    }

    /// Tile width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Tile height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Total pixel count (width × height)
    pub fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Read-only view of the pixel array
    pub fn pixels(&self) -> ArrayView3<'_, f64> {
        self.pixels.view()
    }
}

/// Ordered, non-empty tiles sharing one size; a tile's input index is its position
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
}

impl TileSet {
    /// Validate and wrap a tile sequence
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sequence is empty
    /// - Any tile's size differs from the first tile's size
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        let first = tiles
            .first()
            .ok_or_else(|| invalid_source(&"no tiles supplied"))?;
        let (width, height) = (first.width(), first.height());

        if let Some((index, tile)) = tiles
            .iter()
            .enumerate()
            .find(|(_, tile)| tile.width() != width || tile.height() != height)
        {
            return Err(ReassemblyError::TileSizeMismatch {
                index,
                expected: (width, height),
                found: (tile.width(), tile.height()),
            });
        }

        Ok(Self {
            tiles,
            width,
            height,
        })
    }

    /// Convert and validate a sequence of RGB images
    ///
    /// # Errors
    ///
    /// Returns an error if any image is empty, the sequence is empty or the
    /// sizes differ
    pub fn from_rgb_images(images: &[RgbImage]) -> Result<Self> {
        let tiles = images
            .iter()
            .map(Tile::from_rgb_image)
            .collect::<Result<Vec<_>>>()?;
        Self::new(tiles)
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed set
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at an input index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Tiles in input order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Shared tile dimensions (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}
