//! Emulated aerial-camera photographs of a runway scene
//!
//! Targets are composited at randomly chosen, mutually separated points on a
//! runway background, the composite is blurred horizontally to simulate
//! camera motion, and the result is sliced into fixed-size photos at an even
//! horizontal stride.

#![forbid(unsafe_code)]

/// Input/output, configuration, logging and error handling
pub mod io;
/// Fixed-size photo windows cut from the composite
pub mod photo;
/// Separated target centers and target asset selection
pub mod placement;
/// Scene compositing, blur and the per-run runway
pub mod scene;

pub use io::error::{EmulatorError, Result};
