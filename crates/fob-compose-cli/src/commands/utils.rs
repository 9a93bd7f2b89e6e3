//! Helpers shared by the commands.

use std::path::PathBuf;

use fob_compose::{ENV_PREFIX, ProjectSettings, SETTINGS_FILES, SettingsDiscovery};
use tracing::debug;

use crate::cli::SettingsArgs;
use crate::error::{CliError, Result, ResultExt};

/// Absolute project root: `--root` if given, else the current directory.
pub(crate) fn project_root(args: &SettingsArgs) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let root = match &args.root {
        Some(root) if root.is_absolute() => root.clone(),
        Some(root) => cwd.join(root),
        None => cwd,
    };

    if !root.is_dir() {
        return Err(CliError::RootNotFound(root));
    }
    Ok(root)
}

/// True when no `--config` is given and the root has no settings file.
pub(crate) fn uses_default_settings(args: &SettingsArgs) -> Result<bool> {
    if args.config.is_some() {
        return Ok(false);
    }
    Ok(SettingsDiscovery::new(project_root(args)?).find().is_none())
}

/// Load settings for the root, from `--config` or by discovery.
pub(crate) fn load_settings(args: &SettingsArgs) -> Result<ProjectSettings> {
    let root = project_root(args)?;
    let discovery = SettingsDiscovery::new(&root);

    let settings = match &args.config {
        Some(path) => discovery.load_from(path)?,
        None => {
            if discovery.find().is_none() {
                debug!(root = %root.display(), "no settings file, using defaults");
            }
            discovery.load().with_hint(format!(
                "Settings are read from {} in the project root and {ENV_PREFIX}* variables",
                SETTINGS_FILES.join(" or ")
            ))?
        }
    };
    Ok(settings)
}
