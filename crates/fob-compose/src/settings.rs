//! Project settings: the fixed inputs of the base descriptor and the style
//! subsystem.
//!
//! Paths may be relative; they are resolved against [`ProjectSettings::root`]
//! right before they reach the base builder. Loading from files and the
//! environment lives in [`crate::discovery`].

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use path_clean::PathClean;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::base::build_base;
use crate::error::Result;
use crate::fragment::{AliasMap, EntryMap, Fragment};
use crate::overlays::PrefixWrap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectSettings {
    /// Directory every relative path is resolved against
    #[serde(skip)]
    pub root: PathBuf,

    /// Source directory of the application
    #[serde(default = "default_context")]
    pub context: PathBuf,

    /// Entry bundles: name -> ordered module paths (relative to `context`)
    #[serde(default = "default_entry")]
    pub entry: IndexMap<String, Vec<String>>,

    /// Output directory
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// URL prefix the emitted assets are served from
    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// Short module names -> files they resolve to
    #[serde(default = "default_alias")]
    pub alias: IndexMap<String, PathBuf>,

    /// Port the development server listens on
    #[serde(default = "default_dev_server_port")]
    pub dev_server_port: u16,

    #[serde(default)]
    pub style: StyleSettings,
}

/// Inputs of the style subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleSettings {
    #[serde(default)]
    pub prefix_wrap: PrefixWrap,

    /// Directories the sass compiler searches for imports
    #[serde(default = "default_extra_resources")]
    pub extra_resources: Vec<PathBuf>,

    /// Sass files injected into every CSS module (empty disables CSS modules)
    #[serde(default)]
    pub sass_resources: Vec<PathBuf>,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            prefix_wrap: PrefixWrap::default(),
            extra_resources: default_extra_resources(),
            sass_resources: Vec::new(),
        }
    }
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            context: default_context(),
            entry: default_entry(),
            output_path: default_output_path(),
            public_path: default_public_path(),
            alias: default_alias(),
            dev_server_port: default_dev_server_port(),
            style: StyleSettings::default(),
        }
    }
}

impl ProjectSettings {
    /// Default settings anchored at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Resolve a settings path against the project root.
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.clean()
        } else {
            self.root.join(path).clean()
        }
    }

    /// Build the base fragment from these settings.
    pub fn base_fragment(&self) -> Result<Fragment> {
        let entry: EntryMap = self.entry.clone();
        let alias: AliasMap = self
            .alias
            .iter()
            .map(|(name, target)| {
                let target = if target.as_os_str().is_empty() {
                    target.clone()
                } else {
                    self.resolve_path(target)
                };
                (name.clone(), target)
            })
            .collect();

        build_base(
            self.resolve_path(&self.context),
            &entry,
            self.resolve_path(&self.output_path),
            &self.public_path,
            &alias,
            self.dev_server_port,
        )
    }

    /// JSON schema of the settings file.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(ProjectSettings)).unwrap_or_default()
    }
}

fn default_context() -> PathBuf {
    PathBuf::from("app")
}

fn default_entry() -> IndexMap<String, Vec<String>> {
    let mut entry = IndexMap::new();
    entry.insert("app".to_string(), vec!["./js/index.js".to_string()]);
    entry
}

fn default_output_path() -> PathBuf {
    PathBuf::from("dist")
}

fn default_public_path() -> String {
    "http://jafoteng.co/mfs/".to_string()
}

fn default_alias() -> IndexMap<String, PathBuf> {
    let mut alias = IndexMap::new();
    alias.insert(
        "materialize".to_string(),
        PathBuf::from("app/vendors/materialize/js/bin/materialize.js"),
    );
    alias.insert(
        "hammerjs".to_string(),
        PathBuf::from("app/vendors/materialize/js/hammer.min.js"),
    );
    alias
}

fn default_dev_server_port() -> u16 {
    8100
}

fn default_extra_resources() -> Vec<PathBuf> {
    vec![
        PathBuf::from("node_modules/compass-mixins/lib"),
        PathBuf::from("app/vendors/materialize/sass"),
    ]
}
