//! Miette diagnostic conversion for CLI errors.

use fob_compose::{ComposeError, SettingsError};
use miette::Report;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Compose(e) => compose_error_to_miette(e),
        CliError::Settings(e) => settings_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

fn compose_error_to_miette(err: ComposeError) -> Report {
    match err {
        ComposeError::InvalidBaseConfig { field, reason } => miette::miette!(
            help = format!("Fix '{field}' in fob-compose.toml or the matching FOB_COMPOSE_ variable"),
            "Invalid base configuration for '{}': {}",
            field,
            reason
        ),
        ComposeError::InvalidOverlayOptions { producer, reason } => miette::miette!(
            help = "Overlay options come from the profile and the style settings",
            "Overlay '{}' rejected its options: {}",
            producer,
            reason
        ),
    }
}

fn settings_error_to_miette(err: SettingsError) -> Report {
    match err {
        SettingsError::NotFound(path) => miette::miette!(
            help = "Create the file or drop --config to use fob-compose.toml from the root",
            "Settings file not found: {}",
            path.display()
        ),
        SettingsError::UnsupportedFormat(ext) => miette::miette!(
            help = "Settings files must end in .toml or .json",
            "Unsupported settings format: {}",
            ext
        ),
        other => miette::miette!("{}", other),
    }
}
