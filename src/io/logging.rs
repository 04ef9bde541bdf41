//! Structured logging setup

use tracing_subscriber::EnvFilter;

/// How much the run reports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Warnings and errors only
    Quiet,
    /// Progress of each run step
    #[default]
    Normal,
    /// Every sampled point and composited target
    Verbose,
}

impl Verbosity {
    /// Filter directive used when `RUST_LOG` is unset
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Quiet => "warn",
            Self::Normal => "info",
            Self::Verbose => "debug",
        }
    }
}

/// Install the global `fmt` subscriber
///
/// `RUST_LOG` takes precedence over `verbosity`. Later calls are ignored.
pub fn init_logging(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
