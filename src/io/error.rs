//! Error type shared by every reassembly stage

use std::fmt;
use std::path::PathBuf;

/// Failure of a reassembly run, from loading tiles to exporting the result
///
/// An unsolvable puzzle is not an error: reconstruction returns a partial
/// order instead. Variants here cover bad input, bad parameters and I/O.
#[derive(Debug)]
pub enum ReassemblyError {
    /// A tile or source image could not be decoded
    ImageLoad {
        /// File that failed to decode
        path: PathBuf,
        /// Decoder error
        source: image::ImageError,
    },

    /// The tiles cannot be processed as given
    InvalidSourceData {
        /// What is wrong with the input
        reason: String,
    },

    /// A parameter is outside its accepted range
    InvalidParameter {
        /// Parameter name as used in configuration
        parameter: &'static str,
        /// Rejected value, rendered as text
        value: String,
        /// Accepted range or constraint
        reason: String,
    },

    /// A tile index does not exist in the set
    InvalidTileIndex {
        /// Requested index
        index: usize,
        /// Number of tiles available
        tile_count: usize,
    },

    /// A tile's dimensions differ from the first tile of the set
    ///
    /// Border strips are only comparable between tiles of one size.
    TileSizeMismatch {
        /// Input index of the offending tile
        index: usize,
        /// Dimensions of the first tile (width, height)
        expected: (usize, usize),
        /// Dimensions of the offending tile (width, height)
        found: (usize, usize),
    },

    /// A PNG could not be written
    ImageExport {
        /// Destination file
        path: PathBuf,
        /// Encoder error
        source: image::ImageError,
    },

    /// Reading or creating a file or directory failed
    FileSystem {
        /// File or directory involved
        path: PathBuf,
        /// Operation that was attempted
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ReassemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Cannot decode image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => write!(f, "Unusable tiles: {reason}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "Parameter '{parameter}' = '{value}' rejected: {reason}"),
            Self::InvalidTileIndex { index, tile_count } => {
                write!(f, "Tile {index} does not exist in a set of {tile_count}")
            }
            Self::TileSizeMismatch {
                index,
                expected: (expected_width, expected_height),
                found: (found_width, found_height),
            } => write!(
                f,
                "Tile {index} is {found_width}x{found_height} but the set uses \
                 {expected_width}x{expected_height}"
            ),
            Self::ImageExport { path, source } => {
                write!(f, "Cannot write PNG '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => write!(f, "Cannot {operation} '{}': {source}", path.display()),
        }
    }
}

impl std::error::Error for ReassemblyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidSourceData { .. }
            | Self::InvalidParameter { .. }
            | Self::InvalidTileIndex { .. }
            | Self::TileSizeMismatch { .. } => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ReassemblyError>;

impl From<image::ImageError> for ReassemblyError {
    fn from(source: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::new(),
            source,
        }
    }
}

impl From<std::io::Error> for ReassemblyError {
    fn from(source: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::new(),
            operation: "access",
            source,
        }
    }
}

/// Build an [`ReassemblyError::InvalidParameter`]
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ReassemblyError {
    ReassemblyError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Build an [`ReassemblyError::InvalidSourceData`]
pub fn invalid_source(reason: &impl ToString) -> ReassemblyError {
    ReassemblyError::InvalidSourceData {
        reason: reason.to_string(),
    }
}

/// Reject a CLI target path
pub fn io_error(msg: &str) -> ReassemblyError {
    ReassemblyError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
