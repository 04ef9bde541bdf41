//! Run constants and the validated parameter set for one emulation

use crate::io::error::{Result, invalid_parameter};
use std::path::PathBuf;

// Input and output locations used by the no-argument run
/// Default runway background image
pub const DEFAULT_SCENE_PATH: &str = "runway_xl.png";
/// Default directory of candidate target images
pub const DEFAULT_TARGETS_DIRECTORY: &str = "./targets_2";
/// Default directory receiving the emulated photos
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "../UASCamera2/emulator_photos";

/// Fixed seed for reproducible placement
pub const DEFAULT_SEED: u64 = 42;

// Runway geometry
/// Height of the runway band in pixels
pub const DEFAULT_RUNWAY_HEIGHT: u32 = 1764;
/// Distance from the top of the image to the top of the runway
pub const DEFAULT_Y_OFFSET: u32 = 700;
/// Runway width as a multiple of its height
pub const DEFAULT_WIDTH_RATIO: u32 = 8;

// Target placement
/// Number of targets composited onto the runway
pub const DEFAULT_NUM_TARGETS: usize = 4;
/// Minimum euclidean distance between two target centers
pub const DEFAULT_MIN_SEPARATION: f64 = 500.0;
/// Longer side of a target after resizing
pub const DEFAULT_TARGET_MAX_SIZE: u32 = 100;
/// Overlay pixels with alpha above this value are copied onto the scene
pub const ALPHA_THRESHOLD: u8 = 25;

/// Horizontal motion blur kernel length (must be odd)
pub const MOTION_BLUR_KERNEL: usize = 15;

// Photo tiling
/// Number of photos requested from the tiler
pub const DEFAULT_NUM_PHOTOS: usize = 20;
/// Width of each emulated photo
pub const DEFAULT_PHOTO_WIDTH: u32 = 3040;
/// Height of each emulated photo
pub const DEFAULT_PHOTO_HEIGHT: u32 = 4056;
/// Top edge of every photo window within the scene
pub const DEFAULT_PHOTO_Y: u32 = 0;

// Output settings
/// Filename prefix of saved photos, followed by the zero-based index
pub const OUTPUT_PREFIX: &str = "emulated_image_";
/// Extension of saved photos
pub const OUTPUT_EXTENSION: &str = "png";

/// Width of the export progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Every parameter of one emulation run
#[derive(Clone, Debug, PartialEq)]
pub struct EmulatorConfig {
    /// Runway background image
    pub scene_path: PathBuf,
    /// Directory of candidate target images
    pub targets_directory: PathBuf,
    /// Directory receiving the emulated photos
    pub output_directory: PathBuf,
    /// Seed for the placement random source
    pub seed: u64,
    /// Height of the runway band
    pub runway_height: u32,
    /// Top of the runway band within the image
    pub y_offset: u32,
    /// Runway width as a multiple of its height
    pub width_ratio: u32,
    /// Number of targets to composite
    pub num_targets: usize,
    /// Minimum distance between target centers
    pub min_separation: f64,
    /// Longer side of a resized target
    pub target_max_size: u32,
    /// Optional ceiling on placement candidates; `None` samples until done
    pub max_attempts: Option<usize>,
    /// Motion blur kernel length
    pub blur_kernel: usize,
    /// Number of photos requested
    pub num_photos: usize,
    /// Photo width
    pub photo_width: u32,
    /// Photo height
    pub photo_height: u32,
    /// Photo top edge
    pub photo_y: u32,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            scene_path: PathBuf::from(DEFAULT_SCENE_PATH),
            targets_directory: PathBuf::from(DEFAULT_TARGETS_DIRECTORY),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            seed: DEFAULT_SEED,
            runway_height: DEFAULT_RUNWAY_HEIGHT,
            y_offset: DEFAULT_Y_OFFSET,
            width_ratio: DEFAULT_WIDTH_RATIO,
            num_targets: DEFAULT_NUM_TARGETS,
            min_separation: DEFAULT_MIN_SEPARATION,
            target_max_size: DEFAULT_TARGET_MAX_SIZE,
            max_attempts: None,
            blur_kernel: MOTION_BLUR_KERNEL,
            num_photos: DEFAULT_NUM_PHOTOS,
            photo_width: DEFAULT_PHOTO_WIDTH,
            photo_height: DEFAULT_PHOTO_HEIGHT,
            photo_y: DEFAULT_PHOTO_Y,
        }
    }
}

impl EmulatorConfig {
    /// Reject parameter combinations that cannot produce a run
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if self.runway_height == 0 {
            return Err(invalid_parameter(
                "runway_height",
                &self.runway_height,
                &"must be positive",
            ));
        }
        if self.width_ratio == 0 {
            return Err(invalid_parameter(
                "width_ratio",
                &self.width_ratio,
                &"must be positive",
            ));
        }
        if !(self.min_separation.is_finite() && self.min_separation > 0.0) {
            return Err(invalid_parameter(
                "min_separation",
                &self.min_separation,
                &"must be a positive finite distance",
            ));
        }
        if self.target_max_size == 0 {
            return Err(invalid_parameter(
                "target_max_size",
                &self.target_max_size,
                &"must be positive",
            ));
        }
        if self.blur_kernel % 2 == 0 {
            return Err(invalid_parameter(
                "blur_kernel",
                &self.blur_kernel,
                &"must be odd",
            ));
        }
        if self.photo_width == 0 || self.photo_height == 0 {
            return Err(invalid_parameter(
                "photo_size",
                &format!("{}x{}", self.photo_width, self.photo_height),
                &"both dimensions must be positive",
            ));
        }
        if self.max_attempts == Some(0) {
            return Err(invalid_parameter(
                "max_attempts",
                &0,
                &"must allow at least one attempt",
            ));
        }
        Ok(())
    }
}
