//! Content-based jigsaw reassembly from edge color similarity
//!
//! Tiles sliced from one image are scored pairwise on each side by the Lab
//! distance of their border strip colors. The best match per side becomes a
//! neighbor link, and the resulting graph is walked row by row to recover
//! the row-major layout of the original image.

#![forbid(unsafe_code)]

/// Neighbor summaries, grid reconstruction and the reassembly pipeline
pub mod algorithm;
/// Border sampling and pairwise similarity scanning
pub mod analysis;
/// Color representation and perceptual distance
pub mod color;
/// Input/output, configuration and error handling
pub mod io;
/// Tiles, sides, grid shapes and permutations
pub mod spatial;

pub use algorithm::executor::{Reassembler, ReassemblyConfig, reassemble};
pub use io::error::{ReassemblyError, Result};
