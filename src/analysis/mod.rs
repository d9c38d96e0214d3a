//! Border sampling and edge similarity scanning

/// Mean border colors of tile sides
pub mod border;
/// Pairwise side similarity scan
pub mod similarity;
