//! Edge similarity scan across every ordered tile pair and side
//!
//! For each tile and side, the strip on that side is scored against the
//! opposite strip of every tile in input order, the tile itself included.
//! Scores land in a `(tile, side, other)` table so the union builder can pick
//! the best candidate per direction.

use crate::analysis::border::BorderProfile;
use crate::color::similarity;
use crate::io::configuration::BORDER_THICKNESS;
use crate::io::error::{ReassemblyError, Result, invalid_parameter};
use crate::spatial::side::Side;
use crate::spatial::tile::TileSet;
use ndarray::{Array3, ArrayView1, Axis};

/// Parameters of the similarity scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Border strip thickness in pixels
    pub border_thickness: usize,
    /// Score a tile's own opposite strip as `-inf` instead of comparing it
    pub exclude_self: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            border_thickness: BORDER_THICKNESS,
            exclude_self: false,
        }
    }
}

/// Similarity scores indexed by `(tile, side, other)`
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityTable {
    scores: Array3<f64>,
}

impl SimilarityTable {
    /// Wrap precomputed scores of shape `(tiles, 4, tiles)`
    ///
    /// # Errors
    ///
    /// Returns an error if the array is not shaped `(n, 4, n)`
    pub fn from_array(scores: Array3<f64>) -> Result<Self> {
        let (tiles, sides, others) = scores.dim();
        if sides != Side::ALL.len() || tiles != others {
            return Err(invalid_parameter(
                "scores",
                &format!("{tiles}x{sides}x{others}"),
                &"expected shape (n, 4, n)",
            ));
        }
        Ok(Self { scores })
    }

    /// Number of tiles covered by the table
    pub fn tile_count(&self) -> usize {
        self.scores.dim().0
    }

    /// Scores of one tile side against every tile's opposite side
    pub fn scores(&self, tile: usize, side: Side) -> Option<ArrayView1<'_, f64>> {
        (tile < self.tile_count()).then(|| {
            self.scores
                .index_axis(Axis(0), tile)
                .index_axis_move(Axis(0), side.index())
        })
    }

    /// Single score of `tile`'s `side` against `other`'s opposite side
    pub fn score(&self, tile: usize, side: Side, other: usize) -> Option<f64> {
        self.scores.get((tile, side.index(), other)).copied()
    }
}

/// Scores border strips of a tile set against each other
pub struct SimilarityScanner<'a> {
    tiles: &'a TileSet,
    config: ScanConfig,
    profiles: Vec<BorderProfile>,
}

impl<'a> SimilarityScanner<'a> {
    /// Sample the border profiles of every tile
    ///
    /// # Errors
    ///
    /// Returns an error if the border thickness is zero or does not fit the
    /// tile dimensions
    pub fn new(tiles: &'a TileSet, config: ScanConfig) -> Result<Self> {
        if config.border_thickness == 0 {
            return Err(invalid_parameter(
                "border_thickness",
                &config.border_thickness,
                &"must be positive",
            ));
        }

        let profiles = tiles
            .tiles()
            .iter()
            .map(|tile| BorderProfile::sample(tile, config.border_thickness))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            tiles,
            config,
            profiles,
        })
    }

    /// Scores of one tile side against the opposite side of every tile
    ///
    /// The list is aligned with input order and contains the tile's own
    /// entry; with `exclude_self` that entry is `f64::NEG_INFINITY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile index is out of range
    pub fn scores_for(&self, tile_index: usize, side: Side) -> Result<Vec<f64>> {
        let profile = self
            .profiles
            .get(tile_index)
            .ok_or(ReassemblyError::InvalidTileIndex {
                index: tile_index,
                tile_count: self.tiles.len(),
            })?;
        let own = profile.side(side);
        let facing = side.opposite();

        Ok(self
            .profiles
            .iter()
            .enumerate()
            .map(|(other_index, other)| {
                if self.config.exclude_self && other_index == tile_index {
                    f64::NEG_INFINITY
                } else {
                    similarity(own, other.side(facing))
                }
            })
            .collect())
    }

    /// Score every tile and side
    ///
    /// # Errors
    ///
    /// Returns an error if a tile index is out of range
    pub fn scan(&self) -> Result<SimilarityTable> {
        self.scan_with_progress(|_| {})
    }

    /// Score every tile and side, reporting each finished tile index
    ///
    /// # Errors
    ///
    /// Returns an error if a tile index is out of range
    pub fn scan_with_progress<F>(&self, mut on_tile: F) -> Result<SimilarityTable>
    where
        F: FnMut(usize),
    {
        let count = self.tiles.len();
        let mut scores = Array3::zeros((count, Side::ALL.len(), count));

        for tile_index in 0..count {
            for side in Side::ALL {
                let row = self.scores_for(tile_index, side)?;
                for (other_index, value) in row.into_iter().enumerate() {
                    if let Some(slot) = scores.get_mut((tile_index, side.index(), other_index)) {
                        *slot = value;
                    }
                }
            }
            on_tile(tile_index);
        }

        Ok(SimilarityTable { scores })
    }

    /// Configuration in use
    pub const fn config(&self) -> ScanConfig {
        self.config
    }
}
