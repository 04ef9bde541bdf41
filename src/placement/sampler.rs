//! Rejection sampling of mutually separated points

use crate::io::error::{EmulatorError, Result, invalid_parameter};
use rand::Rng;
use std::fmt;

/// Integer pixel coordinate within a scene
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Half-open rectangle `[x_min, x_max) × [y_min, y_max)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Leftmost column, inclusive
    pub x_min: u32,
    /// Right bound, exclusive
    pub x_max: u32,
    /// Top row, inclusive
    pub y_min: u32,
    /// Bottom bound, exclusive
    pub y_max: u32,
}

impl Region {
    /// Create a region from its bounds
    ///
    /// # Errors
    ///
    /// Returns an error if either axis is empty
    pub fn new(x_min: u32, x_max: u32, y_min: u32, y_max: u32) -> Result<Self> {
        if x_min >= x_max {
            return Err(invalid_parameter(
                "region",
                &format!("x {x_min}..{x_max}"),
                &"horizontal extent is empty",
            ));
        }
        if y_min >= y_max {
            return Err(invalid_parameter(
                "region",
                &format!("y {y_min}..{y_max}"),
                &"vertical extent is empty",
            ));
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Runway band of `height` rows starting at `y_offset`, `height * ratio` columns wide
    ///
    /// # Errors
    ///
    /// Returns an error if the band is empty or its far edge overflows `u32`
    pub fn runway(height: u32, y_offset: u32, ratio: u32) -> Result<Self> {
        let width = height.checked_mul(ratio).ok_or_else(|| {
            invalid_parameter(
                "width_ratio",
                &ratio,
                &format!("runway width {height} * {ratio} overflows"),
            )
        })?;
        let y_max = y_offset.checked_add(height).ok_or_else(|| {
            invalid_parameter(
                "y_offset",
                &y_offset,
                &format!("runway bottom {y_offset} + {height} overflows"),
            )
        })?;
        Self::new(0, width, y_offset, y_max)
    }

    /// Horizontal extent
    pub const fn width(&self) -> u32 {
        self.x_max - self.x_min
    }

    /// Vertical extent
    pub const fn height(&self) -> u32 {
        self.y_max - self.y_min
    }

    /// Whether `point` lies inside the region
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x_min
            && point.x < self.x_max
            && point.y >= self.y_min
            && point.y < self.y_max
    }

    /// Draw a point uniformly from the region
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point {
            x: rng.random_range(self.x_min..self.x_max),
            y: rng.random_range(self.y_min..self.y_max),
        }
    }
}

/// Places points in a region so that every pair is at least `min_separation` apart
///
/// Candidates are drawn uniformly and kept only if they clear every point
/// accepted so far. Without an attempt ceiling an infeasible packing never
/// terminates; with one, exhaustion yields `PlacementInfeasible`.
#[derive(Clone, Copy, Debug)]
pub struct PlacementSampler {
    region: Region,
    min_separation: f64,
    max_attempts: Option<usize>,
}

impl PlacementSampler {
    /// Create an unbounded sampler
    ///
    /// # Errors
    ///
    /// Returns an error if `min_separation` is not a positive finite distance
    pub fn new(region: Region, min_separation: f64) -> Result<Self> {
        if !(min_separation.is_finite() && min_separation > 0.0) {
            return Err(invalid_parameter(
                "min_separation",
                &min_separation,
                &"must be a positive finite distance",
            ));
        }
        Ok(Self {
            region,
            min_separation,
            max_attempts: None,
        })
    }

    /// Give up after `limit` candidates in total
    #[must_use]
    pub const fn with_max_attempts(mut self, limit: usize) -> Self {
        self.max_attempts = Some(limit);
        self
    }

    /// Region candidates are drawn from
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Minimum pairwise distance
    pub const fn min_separation(&self) -> f64 {
        self.min_separation
    }

    /// Candidate ceiling, if any
    pub const fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }

    /// Accept `count` points, returned in acceptance order
    ///
    /// # Errors
    ///
    /// Returns `PlacementInfeasible` if an attempt ceiling is set and reached
    /// before `count` points were accepted
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<Point>> {
        let mut points: Vec<Point> = Vec::with_capacity(count);
        let mut attempts = 0_usize;

        while points.len() < count {
            if let Some(limit) = self.max_attempts
                && attempts >= limit
            {
                return Err(EmulatorError::PlacementInfeasible {
                    placed: points.len(),
                    requested: count,
                    attempts,
                });
            }
            attempts += 1;

            let candidate = self.region.random_point(rng);
            if points
                .iter()
                .all(|accepted| accepted.distance(candidate) >= self.min_separation)
            {
                tracing::debug!(point = %candidate, attempts, "accepted placement");
                points.push(candidate);
            }
        }

        Ok(points)
    }
}

/// Unbounded rejection sampling of `count` separated points in `region`
///
/// Does not terminate when the packing is infeasible.
///
/// # Errors
///
/// Returns an error if `min_separation` is not a positive finite distance
pub fn sample_points<R: Rng + ?Sized>(
    count: usize,
    region: Region,
    min_separation: f64,
    rng: &mut R,
) -> Result<Vec<Point>> {
    PlacementSampler::new(region, min_separation)?.sample(count, rng)
}
