//! File-based settings discovery.
//!
//! Settings are layered with figment, lowest precedence first:
//!
//! 1. serde defaults on [`ProjectSettings`]
//! 2. the settings file (`fob-compose.toml` / `fob-compose.json`, or an explicit path)
//! 3. `FOB_COMPOSE_*` environment variables, nested keys split on `__`
//!    (e.g. `FOB_COMPOSE_STYLE__PREFIX_WRAP__ENABLED=false`)

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Toml},
};
use tracing::debug;

use crate::error::SettingsError;
use crate::settings::ProjectSettings;

/// Settings file names, in lookup order.
pub const SETTINGS_FILES: [&str; 2] = ["fob-compose.toml", "fob-compose.json"];

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "FOB_COMPOSE_";

/// Finds and loads project settings under a root directory.
///
/// # Example
///
/// ```no_run
/// use fob_compose::SettingsDiscovery;
///
/// let settings = SettingsDiscovery::new("/srv/site").load().unwrap();
/// assert_eq!(settings.dev_server_port, 8100);
/// ```
pub struct SettingsDiscovery {
    root: PathBuf,
}

impl SettingsDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// First settings file present in the root, if any.
    pub fn find(&self) -> Option<PathBuf> {
        SETTINGS_FILES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }

    /// Load settings, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<ProjectSettings, SettingsError> {
        let file = self.find();
        self.extract(file.as_deref())
    }

    /// Load settings from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NotFound`] if the file does not exist.
    pub fn load_from(&self, path: impl AsRef<Path>) -> Result<ProjectSettings, SettingsError> {
        let path = path.as_ref();
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        if !path.is_file() {
            return Err(SettingsError::NotFound(path));
        }
        self.extract(Some(&path))
    }

    fn extract(&self, file: Option<&Path>) -> Result<ProjectSettings, SettingsError> {
        let mut figment = Figment::new();

        if let Some(path) = file {
            debug!(path = %path.display(), "loading settings file");
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => figment.merge(Toml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                other => {
                    return Err(SettingsError::UnsupportedFormat(
                        other.unwrap_or("<none>").to_string(),
                    ));
                }
            };
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let mut settings: ProjectSettings =
            figment.extract().map_err(|e| SettingsError::InvalidValue {
                field: if e.path.is_empty() {
                    "settings".to_string()
                } else {
                    e.path.join(".")
                },
                hint: Some(e.kind.to_string()),
            })?;
        settings.root = self.root.clone();

        Ok(settings)
    }
}
