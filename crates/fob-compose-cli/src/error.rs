//! Error handling for the fob-compose CLI.
//!
//! Library failures arrive as [`ComposeError`] or [`SettingsError`] and are
//! wrapped into [`CliError`] via `#[from]`. Variants that a user can fix on
//! their own carry a `Hint:` line.
//!
//! # Example
//!
//! ```rust,no_run
//! use fob_compose::SettingsDiscovery;
//! use fob_compose_cli::error::{Result, ResultExt};
//!
//! fn port() -> Result<u16> {
//!     let settings = SettingsDiscovery::new(".")
//!         .load()
//!         .with_hint("Check fob-compose.toml for typos")?;
//!     Ok(settings.dev_server_port)
//! }
//! ```

mod report;

use std::path::PathBuf;

use fob_compose::{ComposeError, SettingsError};
use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A base or overlay input was rejected while composing
    #[error("Composition failed: {0}")]
    Compose(#[from] ComposeError),

    /// Settings could not be located or parsed
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// One or more profiles failed `check`
    #[error("{failed} of {total} profiles failed to compose\n\nHint: Run with --verbose to see which overlay was rejected")]
    CheckFailed { failed: usize, total: usize },

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Project root does not exist
    #[error("Project root not found: {}\n\nHint: Pass an existing directory to --root", .0.display())]
    RootNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Append a `Hint:` line to the error.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error with a message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
