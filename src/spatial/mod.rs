//! Spatial data structures: tiles, sides, grid shapes and permutations
//!
//! This module contains spatial-related functionality including:
//! - Tile pixel buffers and validated tile sets
//! - Tile sides and border strip geometry
//! - Grid shapes and index permutations
//! - Synthetic puzzles with known solutions

/// Grid shape of a puzzle
pub mod grid;
/// Scrambling and permutation utilities
pub mod permutation;
/// Tile sides and border strips
pub mod side;
/// Seam-coded synthetic puzzles
pub mod synthetic;
/// Tile pixel buffers
pub mod tile;

pub use grid::GridShape;
pub use side::Side;
pub use tile::{Tile, TileSet};
