//! Color representation and perceptual distance

/// CIE Lab conversion and similarity scoring
pub mod metric;

pub use metric::{Color, Lab, similarity};
