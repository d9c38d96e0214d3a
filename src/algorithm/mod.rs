/// End-to-end reassembly pipeline
pub mod executor;
/// Grid reconstruction from neighbor summaries
pub mod reconstruction;
/// Best-neighbor summaries per tile
pub mod union;
