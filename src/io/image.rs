//! Image loading and PNG export of emulated photos

use crate::io::configuration::{OUTPUT_EXTENSION, OUTPUT_PREFIX};
use crate::io::error::{EmulatorError, Result, image_load_error};
use crate::io::progress::ProgressManager;
use crate::photo::Photo;
use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

/// Open an image and convert it to 8-bit RGBA
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file is not a decodable image
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path_buf = path.as_ref().to_path_buf();
    if !path_buf.is_file() {
        return Err(EmulatorError::FileNotFound { path: path_buf });
    }
    let img = image::open(&path_buf).map_err(|e| image_load_error(path_buf, e))?;
    Ok(img.to_rgba8())
}

/// Output path of the photo at zero-based `index`
pub fn photo_path(output_directory: &Path, index: usize) -> PathBuf {
    output_directory.join(format!("{OUTPUT_PREFIX}{index}.{OUTPUT_EXTENSION}"))
}

/// Save one image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| EmulatorError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| EmulatorError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Write every photo to `output_directory` under its sequence index
///
/// # Errors
///
/// Returns an error if any photo fails to save; earlier photos stay on disk
pub fn export_photos(
    photos: &[Photo],
    output_directory: &Path,
    mut progress: Option<&mut ProgressManager>,
) -> Result<Vec<PathBuf>> {
    if let Some(pm) = progress.as_deref_mut() {
        pm.initialize(photos.len());
    }

    let mut written = Vec::with_capacity(photos.len());
    for (index, photo) in photos.iter().enumerate() {
        let path = photo_path(output_directory, index);
        let announce = || {
            tracing::info!(
                "Saving emulated image {index} at coordinates {}",
                photo.origin
            );
        };
        match progress.as_deref() {
            Some(pm) => pm.suspend(announce),
            None => announce(),
        }
        save_png(&photo.image, &path)?;

        if let Some(pm) = progress.as_deref_mut() {
            pm.photo_saved(index, photo.origin);
        }
        written.push(path);
    }

    if let Some(pm) = progress {
        pm.finish();
    }

    Ok(written)
}
