//! Target placement within the runway region
//!
//! This module contains:
//! - Integer points and half-open placement regions
//! - Rejection sampling under a minimum-separation constraint
//! - Selection of target assets from a candidate directory

/// Target asset discovery and selection without replacement
pub mod assets;
/// Minimum-separation rejection sampling
pub mod sampler;

pub use assets::TargetPool;
pub use sampler::{PlacementSampler, Point, Region, sample_points};
