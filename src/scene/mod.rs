//! Runway scene construction and mutation
//!
//! This module contains:
//! - Target resizing and hard-edged alpha overlay
//! - Horizontal motion blur
//! - The runway scene that owns the composite for one run

/// Horizontal box convolution simulating camera motion
pub mod blur;
/// Target resizing, clamped placement and alpha overlay
pub mod compositor;
/// Scene ownership and the placement, blur and photo steps
pub mod runway;

pub use compositor::Footprint;
pub use runway::{Runway, RunwayGeometry, TargetPlacement};
