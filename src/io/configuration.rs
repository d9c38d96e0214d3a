//! Reassembly constants and tunable parameters

/// Width in pixels of the border strip sampled on each tile side
pub const BORDER_THICKNESS: usize = 5;

// Scores come from (1 - deltaE) * 100, so this only admits near-identical colors
/// Minimum similarity a best match must exceed to count as a neighbor
pub const ACCURACY_FACTOR: f64 = 97.0;

/// Fixed seed for reproducible scrambling
pub const DEFAULT_SEED: u64 = 42;

/// Rows used when slicing a source image without an explicit shape
pub const DEFAULT_GRID_ROWS: usize = 4;

/// Columns used when slicing a source image without an explicit shape
pub const DEFAULT_GRID_COLS: usize = 4;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// File stem prefix of saved tiles (`image_1.png`, `image_2.png`, ...)
pub const TILE_FILE_PREFIX: &str = "image_";
/// Extension of tile and output images
pub const TILE_FILE_EXTENSION: &str = "png";

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
