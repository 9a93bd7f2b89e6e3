//! Environment resolver: lifecycle signal -> profile -> ordered overlays.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::overlays::{BundleSplit, DevServerOptions, Overlay, Style, StyleOptions, env_map};
use crate::settings::ProjectSettings;

/// Variable the package manager sets to the name of the running script.
pub const LIFECYCLE_EVENT_VAR: &str = "npm_lifecycle_event";

pub const PRODUCTION_SIGNAL: &str = "build:prod";
pub const DEVELOPMENT_SIGNAL: &str = "build:dev";

const CLEAN_DIR: &str = "dist";
const VENDOR_BUNDLE: &str = "vendor";
const VENDOR_MODULES: &[&str] = &["jquery"];
const DEV_SERVER_HOST: &str = "localhost";
const DEVTOOL: &str = "inline-source-map";

/// The token that selects a profile, read once per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleSignal(Option<String>);

impl LifecycleSignal {
    pub fn new(signal: Option<impl Into<String>>) -> Self {
        Self(signal.map(Into::into))
    }

    /// Read the signal from [`LIFECYCLE_EVENT_VAR`].
    pub fn from_env() -> Self {
        Self(std::env::var(LIFECYCLE_EVENT_VAR).ok())
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Which flavour of build the loaders are tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, ordered list of overlays for one kind of run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    Production,
    Development,
    /// Development build plus a local dev server; the fallback for any
    /// signal that is not recognized.
    DefaultWatch,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Production, Profile::Development, Profile::DefaultWatch];

    /// Map a lifecycle signal to a profile. Never fails: unknown or absent
    /// signals select [`Profile::DefaultWatch`].
    pub fn resolve(signal: Option<&str>) -> Self {
        let profile = match signal {
            Some(PRODUCTION_SIGNAL) => Profile::Production,
            Some(DEVELOPMENT_SIGNAL) => Profile::Development,
            _ => Profile::DefaultWatch,
        };
        debug!(signal = signal.unwrap_or("<unset>"), profile = profile.name(), "resolved profile");
        profile
    }

    pub fn name(&self) -> &'static str {
        match self {
            Profile::Production => "production",
            Profile::Development => "development",
            Profile::DefaultWatch => "default-watch",
        }
    }

    /// The signal that selects this profile, `None` for the fallback.
    pub fn signal(&self) -> Option<&'static str> {
        match self {
            Profile::Production => Some(PRODUCTION_SIGNAL),
            Profile::Development => Some(DEVELOPMENT_SIGNAL),
            Profile::DefaultWatch => None,
        }
    }

    pub fn environment(&self) -> Environment {
        match self {
            Profile::Production => Environment::Production,
            Profile::Development | Profile::DefaultWatch => Environment::Development,
        }
    }

    /// Overlays in merge order. Earlier entries have lower precedence.
    pub fn overlays(&self, settings: &ProjectSettings) -> Vec<Overlay> {
        self.overlays_with_port(settings, settings.dev_server_port)
    }

    /// Overlays in merge order, binding the dev server to `dev_server_port`.
    ///
    /// Composition passes the port carried in the base fragment's reserved
    /// slot.
    pub fn overlays_with_port(&self, settings: &ProjectSettings, dev_server_port: u16) -> Vec<Overlay> {
        let style = Overlay::Style(self.style(settings), self.style_options(settings));

        match self {
            Profile::Production => vec![
                style,
                Overlay::Clean(PathBuf::from(CLEAN_DIR)),
                Overlay::SetEnvironmentVariable(env_map([("NODE_ENV", "production")])),
                Overlay::ExtractJsBundle(BundleSplit::new(VENDOR_BUNDLE, VENDOR_MODULES.iter().copied())),
                Overlay::Optimize,
            ],
            Profile::Development => vec![style, Overlay::SourceMaps(DEVTOOL.to_string())],
            Profile::DefaultWatch => vec![
                style,
                Overlay::SourceMaps(DEVTOOL.to_string()),
                Overlay::DevServer(DevServerOptions {
                    host: DEV_SERVER_HOST.to_string(),
                    port: i64::from(dev_server_port),
                }),
            ],
        }
    }

    fn style(&self, settings: &ProjectSettings) -> Style {
        Style::new(settings.style.prefix_wrap.clone()).with_sass_resources(
            settings
                .style
                .sass_resources
                .iter()
                .map(|p| settings.resolve_path(p)),
        )
    }

    fn style_options(&self, settings: &ProjectSettings) -> StyleOptions {
        StyleOptions {
            env: self.environment(),
            filter: String::new(),
            path: Vec::new(),
            extra_resources: settings
                .style
                .extra_resources
                .iter()
                .map(|p| settings.resolve_path(p))
                .collect(),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
