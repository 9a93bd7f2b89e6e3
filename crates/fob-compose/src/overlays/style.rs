//! Stylesheet extraction.
//!
//! Emits the `module.rules` that send `.scss` files through
//! sass -> postcss -> css -> style loaders. The environment only tunes loader
//! options (source maps in development, minimized CSS in production); the
//! shape of the rules is the same for both.

use std::path::PathBuf;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{ComposeError, Result};
use crate::fragment::{Fragment, Loader, Rule};
use crate::profile::Environment;

const SCSS_TEST: &str = r"\.scss$";
const SCSS_MODULE_TEST: &str = r"\.module\.scss$";

/// Wrap every emitted selector in a parent class, so styles can be embedded
/// in a host page without leaking.
///
/// Missing fields fall back to [`PrefixWrap::default`], so setting only the
/// class name keeps the wrap enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PrefixWrap {
    pub enabled: bool,

    pub prefix_class_name: String,
}

impl Default for PrefixWrap {
    fn default() -> Self {
        Self {
            enabled: true,
            prefix_class_name: ".module-0-sub".to_string(),
        }
    }
}

/// Options for one extraction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOptions {
    pub env: Environment,

    /// Regex replacing the default `\.scss$` test. Empty keeps the default.
    #[serde(default)]
    pub filter: String,

    /// Directories the rule is limited to. Empty matches everywhere.
    #[serde(default)]
    pub path: Vec<PathBuf>,

    /// Extra directories the sass compiler searches for imports
    #[serde(default)]
    pub extra_resources: Vec<PathBuf>,
}

/// The style subsystem, configured once per project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    prefix_wrap: PrefixWrap,
    sass_resources: Vec<PathBuf>,
}

impl Style {
    pub fn new(prefix_wrap: PrefixWrap) -> Self {
        Self {
            prefix_wrap,
            sass_resources: Vec::new(),
        }
    }

    /// Sass files injected into every CSS module. Turns on the CSS-module rule.
    pub fn with_sass_resources(mut self, resources: impl IntoIterator<Item = PathBuf>) -> Self {
        self.sass_resources.extend(resources);
        self
    }

    pub fn extract_scss_to_css(&self, options: &StyleOptions) -> Result<Fragment> {
        if self.prefix_wrap.enabled && self.prefix_wrap.prefix_class_name.trim().is_empty() {
            return Err(ComposeError::overlay(
                "style",
                "prefix wrap is enabled but no prefix class name is set",
            ));
        }

        let test = if options.filter.is_empty() {
            SCSS_TEST
        } else {
            Regex::new(&options.filter).map_err(|e| {
                ComposeError::overlay("style", format!("invalid filter '{}': {e}", options.filter))
            })?;
            options.filter.as_str()
        };

        let dev = options.env == Environment::Development;
        let mut global = Rule::new(test).include(options.path.iter().cloned());
        if !self.sass_resources.is_empty() {
            global = global.exclude(SCSS_MODULE_TEST);
        }
        let global = global
            .loader(Loader::new("style-loader"))
            .loader(Loader::new("css-loader").with_options(json!({
                "sourceMap": dev,
                "minimize": !dev,
            })))
            .loader(self.postcss_loader(dev))
            .loader(sass_loader(dev, &options.extra_resources));

        let mut fragment = Fragment::new().with_rule(global);

        if !self.sass_resources.is_empty() {
            let modules = Rule::new(SCSS_MODULE_TEST)
                .include(options.path.iter().cloned())
                .loader(Loader::new("style-loader"))
                .loader(Loader::new("css-loader").with_options(json!({
                    "modules": true,
                    "importLoaders": 2,
                    "localIdentName": "[name]__[local]___[hash:base64:5]",
                    "sourceMap": dev,
                    "minimize": !dev,
                })))
                .loader(self.postcss_loader(dev))
                .loader(sass_loader(dev, &options.extra_resources))
                .loader(
                    Loader::new("sass-resources-loader")
                        .with_options(json!({ "resources": self.sass_resources })),
                );
            fragment = fragment.with_rule(modules);
        }

        Ok(fragment)
    }

    fn postcss_loader(&self, dev: bool) -> Loader {
        let mut plugins = vec![Value::from("autoprefixer")];
        if self.prefix_wrap.enabled {
            plugins.push(json!({ "postcss-prefixwrap": self.prefix_wrap.prefix_class_name }));
        }
        Loader::new("postcss-loader").with_options(json!({
            "sourceMap": dev,
            "plugins": plugins,
        }))
    }
}

fn sass_loader(dev: bool, extra_resources: &[PathBuf]) -> Loader {
    Loader::new("sass-loader").with_options(json!({
        "sourceMap": dev,
        "includePaths": extra_resources,
    }))
}
