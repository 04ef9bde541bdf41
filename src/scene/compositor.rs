//! Target overlay onto the scene

use crate::placement::Point;
use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Scene rectangle covered by a placed overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    /// Left column
    pub x: u32,
    /// Top row
    pub y: u32,
    /// Columns covered
    pub width: u32,
    /// Rows covered
    pub height: u32,
}

impl Footprint {
    /// One past the rightmost column
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Dimensions scaled by `min(max/w, max/h)`, floored, at least one pixel
///
/// The longer side lands on `max_size`; smaller targets are scaled up.
pub fn fit_within(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }
    let limit = f64::from(max_size);
    let scale = (limit / f64::from(width)).min(limit / f64::from(height));
    let new_width = (f64::from(width) * scale) as u32;
    let new_height = (f64::from(height) * scale) as u32;
    (new_width.max(1), new_height.max(1))
}

/// Resize a target so its longer side equals `max_size`, keeping aspect ratio
pub fn resize_target(target: &RgbaImage, max_size: u32) -> RgbaImage {
    let (width, height) = fit_within(target.width(), target.height(), max_size);
    if (width, height) == target.dimensions() {
        return target.clone();
    }
    imageops::resize(target, width, height, FilterType::Triangle)
}

// Center on `center`, then clamp to [0, scene - overlay]; an overlay wider
// than the scene is anchored at 0.
fn clamp_axis(center: u32, overlay: u32, scene: u32) -> u32 {
    let start = i64::from(center) - i64::from(overlay / 2);
    let upper = i64::from(scene) - i64::from(overlay);
    u32::try_from(start.min(upper).max(0)).unwrap_or(0)
}

/// Top-left corner placing an overlay of `overlay` size centered on `center`,
/// clamped so the overlay stays inside a scene of `scene` size
pub fn placement_origin(center: Point, overlay: (u32, u32), scene: (u32, u32)) -> Point {
    Point::new(
        clamp_axis(center.x, overlay.0, scene.0),
        clamp_axis(center.y, overlay.1, scene.1),
    )
}

/// Copy RGB of every overlay pixel whose alpha exceeds `alpha_threshold`
///
/// Scene alpha is left as is. Overlay pixels falling outside the scene are
/// dropped. Returns the scene rectangle the overlay covers.
pub fn overlay_opaque(
    scene: &mut RgbaImage,
    overlay: &RgbaImage,
    origin: Point,
    alpha_threshold: u8,
) -> Footprint {
    for (k, j, pixel) in overlay.enumerate_pixels() {
        let [red, green, blue, alpha] = pixel.0;
        if alpha <= alpha_threshold {
            continue;
        }
        let (Some(x), Some(y)) = (origin.x.checked_add(k), origin.y.checked_add(j)) else {
            continue;
        };
        if let Some(target) = scene.get_pixel_mut_checked(x, y) {
            target.0[0] = red;
            target.0[1] = green;
            target.0[2] = blue;
        }
    }

    Footprint {
        x: origin.x,
        y: origin.y,
        width: overlay.width().min(scene.width().saturating_sub(origin.x)),
        height: overlay.height().min(scene.height().saturating_sub(origin.y)),
    }
}

/// Center an already resized overlay on `center` with clamping, and paint it
pub fn composite_target(
    scene: &mut RgbaImage,
    overlay: &RgbaImage,
    center: Point,
    alpha_threshold: u8,
) -> Footprint {
    let origin = placement_origin(center, overlay.dimensions(), scene.dimensions());
    overlay_opaque(scene, overlay, origin, alpha_threshold)
}
