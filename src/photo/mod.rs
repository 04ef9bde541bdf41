//! Emulated photographs cut from the composite scene

/// Deterministic windowing of the scene into fixed-size photos
pub mod tiler;

pub use tiler::{Photo, PhotoLayout, compute_stride, tile, tile_origins};
