//! The runway scene: placement, compositing, blur and photo generation

use crate::io::configuration::ALPHA_THRESHOLD;
use crate::io::error::Result;
use crate::io::image::load_rgba;
use crate::photo::{Photo, PhotoLayout, tile};
use crate::placement::{PlacementSampler, Point, Region, TargetPool};
use crate::scene::blur::motion_blur;
use crate::scene::compositor::{Footprint, composite_target, resize_target};
use image::RgbaImage;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Position of the runway band within the scene image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunwayGeometry {
    /// Rows covered by the runway
    pub height: u32,
    /// First runway row
    pub y_offset: u32,
    /// Runway width as a multiple of its height
    pub width_ratio: u32,
}

impl RunwayGeometry {
    /// Region targets may be centered in
    ///
    /// # Errors
    ///
    /// Returns an error if the band is empty or overflows
    pub fn region(&self) -> Result<Region> {
        Region::runway(self.height, self.y_offset, self.width_ratio)
    }
}

/// How targets are spread over the runway
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetPlacement {
    /// Targets to composite
    pub count: usize,
    /// Minimum distance between target centers
    pub min_separation: f64,
    /// Longer side of a resized target
    pub max_size: u32,
    /// Candidate ceiling for the sampler; `None` samples until done
    pub max_attempts: Option<usize>,
}

/// Owns the composite image for the duration of one run
#[derive(Debug)]
pub struct Runway {
    scene: RgbaImage,
    geometry: RunwayGeometry,
    region: Region,
    points: Vec<Point>,
    targets: Vec<PathBuf>,
}

impl Runway {
    /// Load the background image
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image file does not exist or cannot be decoded
    /// - The runway geometry describes an empty region
    pub fn open<P: AsRef<Path>>(path: P, geometry: RunwayGeometry) -> Result<Self> {
        let scene = load_rgba(path.as_ref())?;
        tracing::info!(
            path = %path.as_ref().display(),
            width = scene.width(),
            height = scene.height(),
            "loaded runway scene"
        );
        Self::from_image(scene, geometry)
    }

    /// Wrap an in-memory background image
    ///
    /// # Errors
    ///
    /// Returns an error if the runway geometry describes an empty region
    pub fn from_image(scene: RgbaImage, geometry: RunwayGeometry) -> Result<Self> {
        let region = geometry.region()?;
        if region.x_max > scene.width() || region.y_max > scene.height() {
            tracing::warn!(
                region_width = region.x_max,
                region_bottom = region.y_max,
                scene_width = scene.width(),
                scene_height = scene.height(),
                "runway region extends past the scene, targets will be clamped"
            );
        }
        Ok(Self {
            scene,
            geometry,
            region,
            points: Vec::new(),
            targets: Vec::new(),
        })
    }

    /// Current composite
    pub const fn scene(&self) -> &RgbaImage {
        &self.scene
    }

    /// Release the composite
    pub fn into_scene(self) -> RgbaImage {
        self.scene
    }

    /// Geometry the region was derived from
    pub const fn geometry(&self) -> RunwayGeometry {
        self.geometry
    }

    /// Region targets are centered in
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Target centers in acceptance order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Target files, paired positionally with [`Self::points`]
    pub fn targets(&self) -> &[PathBuf] {
        &self.targets
    }

    /// Sample target centers, select target files, and composite each pair
    ///
    /// Centers are drawn before files, both from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The separation is invalid or the sampler runs out of attempts
    /// - The pool holds fewer files than `placement.count`
    /// - A target file cannot be decoded, in which case the scene is unchanged
    pub fn place_targets<R: Rng + ?Sized>(
        &mut self,
        pool: &TargetPool,
        placement: &TargetPlacement,
        rng: &mut R,
    ) -> Result<Vec<Footprint>> {
        let mut sampler = PlacementSampler::new(self.region, placement.min_separation)?;
        if let Some(limit) = placement.max_attempts {
            sampler = sampler.with_max_attempts(limit);
        }

        let points = sampler.sample(placement.count, rng)?;
        let targets = pool.select(placement.count, rng)?;

        // Decode every target before painting so a bad file leaves the scene untouched
        let overlays = targets
            .iter()
            .map(|path| load_rgba(path).map(|target| resize_target(&target, placement.max_size)))
            .collect::<Result<Vec<_>>>()?;

        let mut footprints = Vec::with_capacity(points.len());
        for ((point, target_path), overlay) in points.iter().zip(&targets).zip(&overlays) {
            let footprint = composite_target(&mut self.scene, overlay, *point, ALPHA_THRESHOLD);
            tracing::debug!(
                target = %target_path.display(),
                center = %point,
                x = footprint.x,
                y = footprint.y,
                width = footprint.width,
                height = footprint.height,
                "composited target"
            );
            footprints.push(footprint);
        }

        self.points = points;
        self.targets = targets;
        Ok(footprints)
    }

    /// Blur the whole composite horizontally
    ///
    /// # Errors
    ///
    /// Returns an error if `kernel_len` is zero or even
    pub fn apply_motion_blur(&mut self, kernel_len: usize) -> Result<()> {
        motion_blur(&mut self.scene, kernel_len)?;
        tracing::debug!(kernel_len, "applied motion blur");
        Ok(())
    }

    /// Slice the composite into photos
    ///
    /// # Errors
    ///
    /// Returns an error if the photo windows fall below the scene
    pub fn generate_photos(&self, layout: &PhotoLayout) -> Result<Vec<Photo>> {
        tile(&self.scene, layout)
    }
}
