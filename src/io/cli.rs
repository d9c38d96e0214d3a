//! Command-line interface for reassembling tile sets and scrambled images

use crate::algorithm::executor::{Reassembler, ReassemblyConfig};
use crate::algorithm::reconstruction::Reconstruction;
use crate::io::configuration::{
    ACCURACY_FACTOR, BORDER_THICKNESS, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_SEED,
    OUTPUT_SUFFIX, TILE_FILE_EXTENSION,
};
use crate::io::error::{Result, invalid_source, io_error};
use crate::io::image::{assemble, export_png, load_image, load_tiles, save_tiles, slice_image};
use crate::io::logging;
use crate::io::progress::ProgressManager;
use crate::spatial::grid::GridShape;
use crate::spatial::permutation::{apply, expected_order, scramble};
use crate::spatial::tile::TileSet;
use clap::{ArgAction, Parser};
use image::RgbImage;
use simplelog::LevelFilter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tileseam")]
#[command(
    author,
    version,
    about = "Reassemble scrambled image tiles from their edge colors"
)]
/// Command-line arguments for the reassembly tool
pub struct Cli {
    /// PNG image to slice, scramble and solve, or a directory of tile PNGs
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Grid rows (implies a square grid if columns are not given)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Grid columns (implies a square grid if rows are not given)
    #[arg(short, long)]
    pub cols: Option<usize>,

    /// Random seed for scrambling an image target
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Border strip thickness in pixels
    #[arg(short = 't', long, default_value_t = BORDER_THICKNESS)]
    pub thickness: usize,

    /// Minimum similarity score for accepting a neighbor
    #[arg(short, long, default_value_t = ACCURACY_FACTOR)]
    pub accuracy: f64,

    /// Never accept a tile as its own neighbor
    #[arg(short = 'x', long)]
    pub exclude_self: bool,

    /// Path of the reassembled PNG (defaults to <target>_result.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the scrambled tiles of an image target to this directory
    #[arg(long, value_name = "DIR")]
    pub save_tiles: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by `--quiet` and `-v`
    pub const fn log_level(&self) -> LevelFilter {
        logging::level_for(self.verbose, self.quiet)
    }

    /// Grid shape requested on the command line, if any
    ///
    /// # Errors
    ///
    /// Returns an error if a requested dimension is zero
    pub fn shape(&self) -> Result<Option<GridShape>> {
        match (self.rows, self.cols) {
            (Some(rows), Some(cols)) => GridShape::new(rows, cols).map(Some),
            (Some(side), None) | (None, Some(side)) => GridShape::new(side, side).map(Some),
            (None, None) => Ok(None),
        }
    }

    /// Reassembly configuration for an optional explicit shape
    pub const fn config(&self, shape: Option<GridShape>) -> ReassemblyConfig {
        ReassemblyConfig {
            border_thickness: self.thickness,
            accuracy_factor: self.accuracy,
            exclude_self: self.exclude_self,
            shape,
        }
    }
}

/// Result of processing one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Reconstructed order: slot `i` holds the input index of its tile
    pub order: Vec<usize>,
    /// Whether the order is a full permutation of the input tiles
    pub complete: bool,
    /// For image targets, whether the order undoes the scramble
    pub solved: Option<bool>,
    /// Where the reassembled image was written
    pub output: PathBuf,
}

/// Drives reassembly of one target with progress tracking
pub struct PuzzleProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl PuzzleProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process the target according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a PNG file nor a directory,
    /// or if loading, reassembly or export fails
    pub fn process(&mut self) -> Result<Outcome> {
        let target = self.cli.target.clone();
        if target.is_file() {
            if target.extension().and_then(|s| s.to_str()) == Some(TILE_FILE_EXTENSION) {
                self.process_image(&target)
            } else {
                Err(io_error("Target file must be a PNG image"))
            }
        } else if target.is_dir() {
            self.process_directory(&target)
        } else {
            Err(io_error("Target must be a PNG file or directory of tiles"))
        }
    }

    fn process_image(&mut self, path: &Path) -> Result<Outcome> {
        let shape = self.cli.shape()?.map_or_else(
            || GridShape::new(DEFAULT_GRID_ROWS, DEFAULT_GRID_COLS),
            Ok,
        )?;
        let source = load_image(path)?;
        let tiles = slice_image(&source, shape)?;

        let scrambled_order = scramble(tiles.len(), self.cli.seed);
        let scrambled = apply(&tiles, &scrambled_order)
            .ok_or_else(|| invalid_source(&"scramble is not a permutation"))?;
        log::info!("scrambled {} tiles with seed {}", tiles.len(), self.cli.seed);

        if let Some(dir) = &self.cli.save_tiles {
            let saved = save_tiles(&scrambled, dir)?;
            log::info!("saved {} tiles to {}", saved.len(), dir.display());
        }

        let reconstruction = self.reassemble(&scrambled, Some(shape))?;
        let order = reconstruction.order();
        let solved = expected_order(&scrambled_order).is_some_and(|expected| expected == order);
        if solved {
            log::info!("reconstruction matches the original layout");
        } else {
            log::warn!("reconstruction differs from the original layout");
        }

        let output = self.export(path, &scrambled, &reconstruction, shape)?;
        Ok(Outcome {
            order,
            complete: reconstruction.is_complete(),
            solved: Some(solved),
            output,
        })
    }

    fn process_directory(&mut self, dir: &Path) -> Result<Outcome> {
        let tiles = load_tiles(dir)?;
        let explicit = self.cli.shape()?;
        let shape = self.cli.config(explicit).shape_for(tiles.len())?;

        let reconstruction = self.reassemble(&tiles, explicit)?;
        let output = self.export(dir, &tiles, &reconstruction, shape)?;
        Ok(Outcome {
            order: reconstruction.order(),
            complete: reconstruction.is_complete(),
            solved: None,
            output,
        })
    }

    fn reassemble(
        &mut self,
        images: &[RgbImage],
        shape: Option<GridShape>,
    ) -> Result<Reconstruction> {
        let tile_set = TileSet::from_rgb_images(images)?;
        let reassembler = Reassembler::new(self.cli.config(shape));

        self.progress_manager.start_stage("scan", tile_set.len());
        let progress = &self.progress_manager;
        let reconstruction =
            reassembler.reassemble_with_progress(&tile_set, |_| progress.advance());
        self.progress_manager.finish();
        reconstruction
    }

    fn export(
        &self,
        target: &Path,
        tiles: &[RgbImage],
        reconstruction: &Reconstruction,
        shape: GridShape,
    ) -> Result<PathBuf> {
        let output = self
            .cli
            .output
            .clone()
            .unwrap_or_else(|| Self::get_output_path(target));
        let image = assemble(tiles, &reconstruction.order(), shape)?;
        export_png(&image, &output)?;
        log::info!("wrote {}", output.display());
        Ok(output)
    }

    /// Default output path: `<stem>_result.png` beside the target
    pub fn get_output_path(target: &Path) -> PathBuf {
        let stem = target.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            TILE_FILE_EXTENSION
        );

        if let Some(parent) = target.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
