//! End-to-end reassembly pipeline
//!
//! tiles → similarity scan → unions → grid reconstruction, in one
//! synchronous pass with no retries.

use crate::algorithm::reconstruction::{GridReconstructor, Reconstruction};
use crate::algorithm::union::{Union, UnionBuilder};
use crate::analysis::similarity::{ScanConfig, SimilarityScanner, SimilarityTable};
use crate::io::configuration::{ACCURACY_FACTOR, BORDER_THICKNESS};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::GridShape;
use crate::spatial::tile::TileSet;

/// Reassembly parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReassemblyConfig {
    /// Border strip thickness in pixels
    pub border_thickness: usize,
    /// Minimum score a best match must exceed
    pub accuracy_factor: f64,
    /// Keep tiles from matching their own opposite side
    pub exclude_self: bool,
    /// Explicit grid shape; inferred as the smallest square when absent
    pub shape: Option<GridShape>,
}

impl Default for ReassemblyConfig {
    fn default() -> Self {
        Self {
            border_thickness: BORDER_THICKNESS,
            accuracy_factor: ACCURACY_FACTOR,
            exclude_self: false,
            shape: None,
        }
    }
}

impl ReassemblyConfig {
    /// Grid shape used for a tile count
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit shape does not hold exactly
    /// `tile_count` tiles
    pub fn shape_for(&self, tile_count: usize) -> Result<GridShape> {
        match self.shape {
            Some(shape) => {
                shape.validate_for(tile_count)?;
                Ok(shape)
            }
            None => Ok(GridShape::square_for(tile_count)),
        }
    }

    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns an error if the thickness is zero or the accuracy factor is
    /// not finite
    pub fn validate(&self) -> Result<()> {
        if self.border_thickness == 0 {
            return Err(invalid_parameter(
                "border_thickness",
                &self.border_thickness,
                &"must be positive",
            ));
        }
        if !self.accuracy_factor.is_finite() {
            return Err(invalid_parameter(
                "accuracy_factor",
                &self.accuracy_factor,
                &"must be finite",
            ));
        }
        Ok(())
    }

    const fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            border_thickness: self.border_thickness,
            exclude_self: self.exclude_self,
        }
    }
}

/// Runs the reassembly pipeline with a fixed configuration
#[derive(Clone, Copy, Debug, Default)]
pub struct Reassembler {
    config: ReassemblyConfig,
}

impl Reassembler {
    /// Create a reassembler
    pub const fn new(config: ReassemblyConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub const fn config(&self) -> &ReassemblyConfig {
        &self.config
    }

    /// Score every tile side against every opposite side
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the border does
    /// not fit the tiles
    pub fn scan<F>(&self, tiles: &TileSet, on_tile: F) -> Result<SimilarityTable>
    where
        F: FnMut(usize),
    {
        self.config.validate()?;
        let scanner = SimilarityScanner::new(tiles, self.config.scan_config())?;
        scanner.scan_with_progress(on_tile)
    }

    /// Derive the union of every tile from a similarity table
    ///
    /// # Errors
    ///
    /// Returns an error if a tile's union cannot be built from the table
    pub fn unions(&self, table: &SimilarityTable) -> Result<Vec<Union>> {
        UnionBuilder::with_accuracy(table, self.config.accuracy_factor).build_all()
    }

    /// Reassemble a tile set
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - An explicit shape does not match the tile count
    /// - The border thickness does not fit the tiles
    pub fn reassemble(&self, tiles: &TileSet) -> Result<Reconstruction> {
        self.reassemble_with_progress(tiles, |_| {})
    }

    /// Reassemble a tile set, reporting each scanned tile index
    ///
    /// # Errors
    ///
    /// Same conditions as [`Reassembler::reassemble`]
    pub fn reassemble_with_progress<F>(&self, tiles: &TileSet, on_tile: F) -> Result<Reconstruction>
    where
        F: FnMut(usize),
    {
        let shape = self.config.shape_for(tiles.len())?;
        log::info!(
            "reassembling {} tiles of {}x{} as a {shape} grid",
            tiles.len(),
            tiles.dimensions().0,
            tiles.dimensions().1
        );

        let table = self.scan(tiles, on_tile)?;
        let unions = self.unions(&table)?;
        let reconstruction = GridReconstructor::new(&unions, shape)?.reconstruct();

        if !reconstruction.is_complete() {
            log::warn!(
                "reconstruction incomplete: {} of {} rows filled",
                reconstruction.filled_rows(),
                shape.rows
            );
        }
        Ok(reconstruction)
    }
}

/// Reassemble a tile set with the given configuration
///
/// # Errors
///
/// Same conditions as [`Reassembler::reassemble`]
pub fn reassemble(tiles: &TileSet, config: ReassemblyConfig) -> Result<Reconstruction> {
    Reassembler::new(config).reassemble(tiles)
}
