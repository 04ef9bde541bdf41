//! Candidate target images and selection without replacement

use crate::io::error::{EmulatorError, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};

/// Candidate target images read from one directory
#[derive(Clone, Debug)]
pub struct TargetPool {
    directory: PathBuf,
    candidates: Vec<PathBuf>,
}

impl TargetPool {
    /// List every raster image file directly inside `directory`
    ///
    /// Candidates are sorted by path so that a seeded selection is
    /// reproducible regardless of directory iteration order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory does not exist
    /// - The directory cannot be read
    pub fn from_directory<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        if !directory.is_dir() {
            return Err(EmulatorError::FileNotFound { path: directory });
        }

        let entries = std::fs::read_dir(&directory).map_err(|e| EmulatorError::FileSystem {
            path: directory.clone(),
            operation: "read directory",
            source: e,
        })?;

        let mut candidates = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| EmulatorError::FileSystem {
                    path: directory.clone(),
                    operation: "read directory entry",
                    source: e,
                })?
                .path();
            if path.is_file() && image::ImageFormat::from_path(&path).is_ok() {
                candidates.push(path);
            }
        }
        candidates.sort();

        tracing::debug!(
            directory = %directory.display(),
            candidates = candidates.len(),
            "loaded target pool"
        );

        Ok(Self {
            directory,
            candidates,
        })
    }

    /// Directory the candidates were read from
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// All candidate paths in sorted order
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the directory held no usable images
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Pick `count` distinct candidates
    ///
    /// # Errors
    ///
    /// Returns `InsufficientAssets` if the pool holds fewer than `count` files
    pub fn select<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<PathBuf>> {
        if count > self.candidates.len() {
            return Err(EmulatorError::InsufficientAssets {
                requested: count,
                available: self.candidates.len(),
                directory: self.directory.clone(),
            });
        }

        Ok(self
            .candidates
            .choose_multiple(rng, count)
            .cloned()
            .collect())
    }
}
