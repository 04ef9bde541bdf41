//! Command-line interface and the end-to-end emulation run

use crate::io::configuration::{
    DEFAULT_MIN_SEPARATION, DEFAULT_NUM_PHOTOS, DEFAULT_NUM_TARGETS, DEFAULT_OUTPUT_DIRECTORY,
    DEFAULT_PHOTO_HEIGHT, DEFAULT_PHOTO_WIDTH, DEFAULT_PHOTO_Y, DEFAULT_RUNWAY_HEIGHT,
    DEFAULT_SCENE_PATH, DEFAULT_SEED, DEFAULT_TARGET_MAX_SIZE, DEFAULT_TARGETS_DIRECTORY,
    DEFAULT_WIDTH_RATIO, DEFAULT_Y_OFFSET, EmulatorConfig, MOTION_BLUR_KERNEL,
};
use crate::io::error::Result;
use crate::io::image::export_photos;
use crate::io::logging::Verbosity;
use crate::io::progress::ProgressManager;
use crate::photo::PhotoLayout;
use crate::placement::TargetPool;
use crate::scene::{Runway, RunwayGeometry, TargetPlacement};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "runway-emulator")]
#[command(
    author,
    version,
    about = "Emulate aerial camera photos of a runway with composited targets"
)]
/// Command-line arguments; every option defaults to the reference run
pub struct Cli {
    /// Runway background image
    #[arg(long, default_value = DEFAULT_SCENE_PATH)]
    pub scene: PathBuf,

    /// Directory of candidate target images
    #[arg(short, long, default_value = DEFAULT_TARGETS_DIRECTORY)]
    pub targets_dir: PathBuf,

    /// Directory receiving the emulated photos
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIRECTORY)]
    pub output_dir: PathBuf,

    /// Random seed for reproducible placement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Height of the runway band in pixels
    #[arg(long, default_value_t = DEFAULT_RUNWAY_HEIGHT)]
    pub runway_height: u32,

    /// Distance from the image top to the runway top
    #[arg(long, default_value_t = DEFAULT_Y_OFFSET)]
    pub y_offset: u32,

    /// Runway width as a multiple of its height
    #[arg(long, default_value_t = DEFAULT_WIDTH_RATIO)]
    pub ratio: u32,

    /// Number of targets to composite
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_TARGETS)]
    pub num_targets: usize,

    /// Minimum distance between target centers
    #[arg(long, default_value_t = DEFAULT_MIN_SEPARATION)]
    pub min_separation: f64,

    /// Longer side of each resized target
    #[arg(long, default_value_t = DEFAULT_TARGET_MAX_SIZE)]
    pub target_size: u32,

    /// Give up placement after this many candidates (unbounded if omitted)
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Number of photos requested
    #[arg(short = 'p', long, default_value_t = DEFAULT_NUM_PHOTOS)]
    pub num_photos: usize,

    /// Width of each photo
    #[arg(short = 'W', long, default_value_t = DEFAULT_PHOTO_WIDTH)]
    pub photo_width: u32,

    /// Height of each photo
    #[arg(short = 'H', long, default_value_t = DEFAULT_PHOTO_HEIGHT)]
    pub photo_height: u32,

    /// Top row of every photo
    #[arg(long, default_value_t = DEFAULT_PHOTO_Y)]
    pub photo_y: u32,

    /// Only report warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report every sampled point and composited target
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Logging level requested by the flags
    pub const fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Collect the run parameters
    pub fn to_config(&self) -> EmulatorConfig {
        EmulatorConfig {
            scene_path: self.scene.clone(),
            targets_directory: self.targets_dir.clone(),
            output_directory: self.output_dir.clone(),
            seed: self.seed,
            runway_height: self.runway_height,
            y_offset: self.y_offset,
            width_ratio: self.ratio,
            num_targets: self.num_targets,
            min_separation: self.min_separation,
            target_max_size: self.target_size,
            max_attempts: self.max_attempts,
            blur_kernel: MOTION_BLUR_KERNEL,
            num_photos: self.num_photos,
            photo_width: self.photo_width,
            photo_height: self.photo_height,
            photo_y: self.photo_y,
        }
    }
}

/// Runs placement, compositing, blur, tiling and export for one configuration
pub struct EmulationRunner {
    config: EmulatorConfig,
    progress_manager: Option<ProgressManager>,
}

impl EmulationRunner {
    /// Create a runner for `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: EmulatorConfig, show_progress: bool) -> Result<Self> {
        config.validate()?;
        let progress_manager = show_progress.then(ProgressManager::new);
        Ok(Self {
            config,
            progress_manager,
        })
    }

    /// Create a runner from parsed arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments fail validation
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::new(cli.to_config(), cli.should_show_progress())
    }

    /// Parameters of this run
    pub const fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Execute the run and return the paths of the saved photos
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The scene or a target image cannot be loaded
    /// - The target directory holds too few images
    /// - Placement runs out of attempts
    /// - The photo windows do not fit the scene
    /// - A photo cannot be saved
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let start_time = Instant::now();
        let config = &self.config;
        let mut rng = StdRng::seed_from_u64(config.seed);

        let geometry = RunwayGeometry {
            height: config.runway_height,
            y_offset: config.y_offset,
            width_ratio: config.width_ratio,
        };
        let mut runway = Runway::open(&config.scene_path, geometry)?;
        let pool = TargetPool::from_directory(&config.targets_directory)?;

        let placement = TargetPlacement {
            count: config.num_targets,
            min_separation: config.min_separation,
            max_size: config.target_max_size,
            max_attempts: config.max_attempts,
        };
        runway.place_targets(&pool, &placement, &mut rng)?;
        tracing::info!(
            points = ?runway.points(),
            "placed {} targets",
            runway.points().len()
        );

        runway.apply_motion_blur(config.blur_kernel)?;

        let layout = PhotoLayout {
            count: config.num_photos,
            width: config.photo_width,
            height: config.photo_height,
            y_origin: config.photo_y,
        };
        let photos = runway.generate_photos(&layout)?;
        if photos.len() < layout.count {
            tracing::warn!(
                requested = layout.count,
                produced = photos.len(),
                "scene too narrow for the requested photo count"
            );
        }

        let written = export_photos(
            &photos,
            &config.output_directory,
            self.progress_manager.as_mut(),
        )?;

        tracing::info!(
            photos = written.len(),
            elapsed_ms = start_time.elapsed().as_millis(),
            output = %config.output_directory.display(),
            "emulation complete"
        );
        Ok(written)
    }
}
