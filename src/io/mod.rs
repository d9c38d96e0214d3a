//! Input/output, configuration and error handling

/// Command-line interface and batch processing
pub mod cli;
/// Constants and tunable parameters
pub mod configuration;
/// Error types
pub mod error;
/// Tile image slicing, loading and export
pub mod image;
/// Terminal logger setup
pub mod logging;
/// Progress display
pub mod progress;
