//! Input/output, configuration and error handling

/// Command-line parsing and the end-to-end run
pub mod cli;
/// Run constants and validated parameters
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Image loading and photo export
pub mod image;
/// Structured logging setup
pub mod logging;
/// Export progress display
pub mod progress;
