//! Fixed-size photo windows at an even horizontal stride
//!
//! Windows start at column 0 and advance by the stride while the next window
//! still fits inside the scene. The requested count only sets the stride, so
//! a narrow scene yields fewer photos than requested.

use crate::io::error::{Result, invalid_parameter};
use crate::placement::Point;
use image::RgbaImage;
use image::imageops;

/// Size and vertical position of the photo windows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhotoLayout {
    /// Photos requested, used to derive the stride
    pub count: usize,
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
    /// Top row of every window
    pub y_origin: u32,
}

/// One emulated camera frame and its top-left origin in the scene
#[derive(Clone, Debug)]
pub struct Photo {
    /// Cropped pixels
    pub image: RgbaImage,
    /// Top-left corner within the scene
    pub origin: Point,
}

/// Horizontal step between consecutive window origins
///
/// `leftover` is the scene width minus the photo width. With more than one
/// photo the leftover is split evenly (floored); otherwise the single step
/// spans the whole leftover.
pub fn compute_stride(leftover: u32, count: usize) -> u32 {
    if count > 1 {
        let gaps = count as u64 - 1;
        (u64::from(leftover) / gaps) as u32
    } else {
        leftover
    }
}

/// Top-left origins of every window that fits in a scene of the given size
///
/// A zero stride emits one window instead of repeating it. A scene narrower
/// than a photo emits none.
///
/// # Errors
///
/// Returns an error if:
/// - Either photo dimension is zero
/// - The windows would extend below the bottom of the scene
pub fn tile_origins(
    scene_width: u32,
    scene_height: u32,
    layout: &PhotoLayout,
) -> Result<Vec<Point>> {
    if layout.width == 0 || layout.height == 0 {
        return Err(invalid_parameter(
            "photo_size",
            &format!("{}x{}", layout.width, layout.height),
            &"both dimensions must be positive",
        ));
    }

    let Some(leftover) = scene_width.checked_sub(layout.width) else {
        return Ok(Vec::new());
    };

    if u64::from(layout.y_origin) + u64::from(layout.height) > u64::from(scene_height) {
        return Err(invalid_parameter(
            "photo_y",
            &layout.y_origin,
            &format!(
                "window of height {} does not fit in scene of height {scene_height}",
                layout.height
            ),
        ));
    }

    let stride = compute_stride(leftover, layout.count);
    let mut origins = Vec::new();
    let mut x = 0_u64;

    while x + u64::from(layout.width) <= u64::from(scene_width) {
        origins.push(Point::new(x as u32, layout.y_origin));
        if stride == 0 {
            break;
        }
        x += u64::from(stride);
    }

    Ok(origins)
}

/// Crop every window from `scene`, in increasing column order
///
/// # Errors
///
/// Returns an error under the same conditions as [`tile_origins`]
pub fn tile(scene: &RgbaImage, layout: &PhotoLayout) -> Result<Vec<Photo>> {
    let origins = tile_origins(scene.width(), scene.height(), layout)?;
    tracing::debug!(
        requested = layout.count,
        produced = origins.len(),
        "computed photo windows"
    );

    Ok(origins
        .into_iter()
        .map(|origin| Photo {
            image: imageops::crop_imm(scene, origin.x, origin.y, layout.width, layout.height)
                .to_image(),
            origin,
        })
        .collect())
}
