//! Error types for scene loading, target placement, tiling and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all emulator operations
#[derive(Debug)]
pub enum EmulatorError {
    /// Input file or directory does not exist
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Target pool holds fewer candidates than requested
    InsufficientAssets {
        /// Number of targets requested
        requested: usize,
        /// Number of candidate files found
        available: usize,
        /// Directory the candidates were read from
        directory: PathBuf,
    },

    /// Rejection sampling exhausted its attempt ceiling
    ///
    /// Only raised by a sampler configured with an attempt limit. The
    /// unbounded sampler never returns this and instead does not terminate
    /// on infeasible packings.
    PlacementInfeasible {
        /// Points accepted before giving up
        placed: usize,
        /// Points requested
        requested: usize,
        /// Candidates drawn in total
        attempts: usize,
    },

    /// Failed to open or decode an image
    ImageDecode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for EmulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path } => {
                write!(f, "File not found: '{}'", path.display())
            }
            Self::InsufficientAssets {
                requested,
                available,
                directory,
            } => {
                write!(
                    f,
                    "Requested {requested} targets but only {available} found in '{}'",
                    directory.display()
                )
            }
            Self::PlacementInfeasible {
                placed,
                requested,
                attempts,
            } => {
                write!(
                    f,
                    "Placement infeasible: {placed}/{requested} points placed after {attempts} attempts"
                )
            }
            Self::ImageDecode { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for EmulatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageDecode { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for emulator results
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EmulatorError {
    EmulatorError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Map an image library failure on `path`, splitting out missing files
pub fn image_load_error(path: PathBuf, source: image::ImageError) -> EmulatorError {
    match source {
        image::ImageError::IoError(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
            EmulatorError::FileNotFound { path }
        }
        other => EmulatorError::ImageDecode {
            path,
            source: other,
        },
    }
}
