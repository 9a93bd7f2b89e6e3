//! General-purpose overlay producers.

use std::path::{Component, Path};

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ComposeError, Result};
use crate::fragment::{DevServer, Fragment, PluginDescriptor, PluginKind};

/// Names accepted by [`set_environment_variable`].
const VARIABLE_NAME: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// Mark an output directory for removal before the build.
pub fn clean(dir: impl AsRef<Path>) -> Result<Fragment> {
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        return Err(ComposeError::overlay("clean", "directory cannot be empty"));
    }
    if dir.is_absolute() || dir.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(ComposeError::overlay(
            "clean",
            format!(
                "'{}' must be a directory name inside the project",
                dir.display()
            ),
        ));
    }

    Ok(Fragment::new().with_plugin(
        PluginDescriptor::new(PluginKind::Clean, "clean-webpack-plugin")
            .with_options(json!({ "paths": [dir] })),
    ))
}

/// Inject variables into the define/replace table.
pub fn set_environment_variable(vars: &IndexMap<String, String>) -> Result<Fragment> {
    if vars.is_empty() {
        return Err(ComposeError::overlay(
            "set_environment_variable",
            "at least one variable is required",
        ));
    }

    let variable_name = Regex::new(VARIABLE_NAME)
        .map_err(|e| ComposeError::overlay("set_environment_variable", e.to_string()))?;

    let mut fragment = Fragment::new();
    for (name, value) in vars {
        if !variable_name.is_match(name) {
            return Err(ComposeError::overlay(
                "set_environment_variable",
                format!("'{name}' is not a valid variable name"),
            ));
        }
        fragment = fragment.with_env(name.clone(), value.clone());
    }
    Ok(fragment)
}

/// A named bundle hoisted out of the main bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleSplit {
    pub name: String,
    pub entries: Vec<String>,
}

impl BundleSplit {
    pub fn new<I, S>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Add a named entry and the plugin that keeps its modules out of the main
/// bundle. The runtime goes into a separate `manifest` chunk so vendor
/// hashes stay stable.
pub fn extract_js_bundle(split: &BundleSplit) -> Result<Fragment> {
    if split.name.trim().is_empty() {
        return Err(ComposeError::overlay(
            "extract_js_bundle",
            "bundle name cannot be empty",
        ));
    }
    if split.entries.is_empty() || split.entries.iter().any(|e| e.trim().is_empty()) {
        return Err(ComposeError::overlay(
            "extract_js_bundle",
            format!("bundle '{}' must list at least one module", split.name),
        ));
    }

    Ok(Fragment::new()
        .with_entry(split.name.clone(), split.entries.iter().cloned())
        .with_plugin(
            PluginDescriptor::new(PluginKind::SplitBundle, "commons-chunk-plugin").with_options(
                json!({ "names": [split.name, "manifest"], "minChunks": "Infinity" }),
            ),
        ))
}

/// Minification and dead-code elimination.
pub fn optimize() -> Fragment {
    Fragment::new()
        .with_plugin(
            PluginDescriptor::new(PluginKind::Minify, "uglifyjs-webpack-plugin").with_options(
                json!({
                    "compress": { "warnings": false, "dead_code": true, "unused": true },
                    "comments": false,
                }),
            ),
        )
        .with_plugin(PluginDescriptor::new(
            PluginKind::ConcatenateModules,
            "module-concatenation-plugin",
        ))
}

/// Where the development server binds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOptions {
    pub host: String,
    /// Checked against the TCP port range when the fragment is produced
    pub port: i64,
}

pub fn dev_server(options: &DevServerOptions) -> Result<Fragment> {
    if options.host.trim().is_empty() {
        return Err(ComposeError::overlay("dev_server", "host cannot be empty"));
    }
    let port = u16::try_from(options.port)
        .ok()
        .filter(|p| *p > 0)
        .ok_or_else(|| {
            ComposeError::overlay(
                "dev_server",
                format!(
                    "port must be a positive integer up to 65535 (got {})",
                    options.port
                ),
            )
        })?;

    Ok(Fragment::new().with_dev_server(DevServer {
        host: Some(options.host.clone()),
        port: Some(port),
        options: IndexMap::new(),
    }))
}

/// Pick the bundler's source map strategy.
pub fn source_maps(devtool: &str) -> Result<Fragment> {
    if devtool.trim().is_empty() {
        return Err(ComposeError::overlay(
            "source_maps",
            "devtool cannot be empty",
        ));
    }
    Ok(Fragment::new().with_devtool(devtool))
}

pub(crate) fn env_map<I, K, V>(pairs: I) -> IndexMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
