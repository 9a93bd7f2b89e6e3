//! Partial build descriptors.
//!
//! A [`Fragment`] is what the base builder and every overlay producer return.
//! Every top-level key is optional: `None` means the fragment does not mention
//! the key at all, which the merge engine treats differently from an empty
//! value. Maps keep insertion order so serialized output is stable.

mod plugin;
mod rule;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use plugin::{PluginDescriptor, PluginKind};
pub use rule::{Enforce, Loader, Rule};

/// Entry bundle name to the ordered module paths that seed it.
pub type EntryMap = IndexMap<String, Vec<String>>;

/// Module name to the path it resolves to.
pub type AliasMap = IndexMap<String, PathBuf>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<EntryMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Output>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<PluginDescriptor>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve: Option<Resolve>,

    /// Free-form variables for the bundler's define/replace table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<IndexMap<String, Value>>,

    /// Reserved for the dev-server overlay; never emitted.
    #[serde(skip)]
    pub dev_server_port: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleConfig {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resolve {
    #[serde(default)]
    pub alias: AliasMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DevServer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Any other server option, passed through untouched
    #[serde(flatten)]
    pub options: IndexMap<String, Value>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the fragment mentions no key at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn with_context(mut self, context: impl Into<PathBuf>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add (or extend) a named entry bundle.
    pub fn with_entry<I, S>(mut self, name: impl Into<String>, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry
            .get_or_insert_with(IndexMap::new)
            .entry(name.into())
            .or_default()
            .extend(modules.into_iter().map(Into::into));
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output.get_or_insert_with(Output::default).path = Some(path.into());
        self
    }

    pub fn with_public_path(mut self, public_path: impl Into<String>) -> Self {
        self.output.get_or_insert_with(Output::default).public_path = Some(public_path.into());
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.module
            .get_or_insert_with(ModuleConfig::default)
            .rules
            .push(rule);
        self
    }

    pub fn with_plugin(mut self, plugin: PluginDescriptor) -> Self {
        self.plugins.get_or_insert_with(Vec::new).push(plugin);
        self
    }

    pub fn with_dev_server(mut self, dev_server: DevServer) -> Self {
        self.dev_server = Some(dev_server);
        self
    }

    pub fn with_devtool(mut self, devtool: impl Into<String>) -> Self {
        self.devtool = Some(devtool.into());
        self
    }

    pub fn with_alias(mut self, name: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        self.resolve
            .get_or_insert_with(Resolve::default)
            .alias
            .insert(name.into(), target.into());
        self
    }

    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.env
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_dev_server_port(mut self, port: u16) -> Self {
        self.dev_server_port = Some(port);
        self
    }

    /// Plugins carried by this fragment, in order.
    pub fn plugins(&self) -> &[PluginDescriptor] {
        self.plugins.as_deref().unwrap_or_default()
    }

    /// Module rules carried by this fragment, in order.
    pub fn rules(&self) -> &[Rule] {
        self.module
            .as_ref()
            .map(|m| m.rules.as_slice())
            .unwrap_or_default()
    }

    pub fn has_plugin(&self, kind: PluginKind) -> bool {
        self.plugins().iter().any(|p| p.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_fragment_serializes_to_empty_object() {
        let value = serde_json::to_value(Fragment::new()).unwrap();
        assert_eq!(value, json!({}));
        assert!(Fragment::new().is_empty());
    }

    #[test]
    fn dev_server_port_is_never_emitted() {
        let fragment = Fragment::new().with_dev_server_port(8100);
        assert!(!fragment.is_empty());
        assert_eq!(serde_json::to_value(&fragment).unwrap(), json!({}));
    }

    #[test]
    fn keys_serialize_camel_case() {
        let fragment = Fragment::new()
            .with_public_path("/assets/")
            .with_dev_server(DevServer {
                host: Some("localhost".into()),
                port: Some(8100),
                options: IndexMap::new(),
            });
        let value = serde_json::to_value(&fragment).unwrap();
        assert_eq!(value["output"]["publicPath"], json!("/assets/"));
        assert_eq!(value["devServer"], json!({ "host": "localhost", "port": 8100 }));
    }

    #[test]
    fn with_entry_extends_existing_bundle() {
        let fragment = Fragment::new()
            .with_entry("app", ["./a.js"])
            .with_entry("app", ["./b.js"]);
        assert_eq!(fragment.entry.unwrap()["app"], vec!["./a.js", "./b.js"]);
    }

    #[test]
    fn rule_loaders_serialize_under_use() {
        let fragment = Fragment::new().with_rule(
            Rule::new(r"\.js$")
                .enforce(Enforce::Pre)
                .loader(Loader::new("eslint-loader")),
        );
        let value = serde_json::to_value(&fragment).unwrap();
        assert_eq!(
            value["module"]["rules"][0],
            json!({ "test": r"\.js$", "enforce": "pre", "use": [{ "loader": "eslint-loader" }] })
        );
    }

    #[test]
    fn extra_dev_server_options_are_flattened() {
        let mut options = IndexMap::new();
        options.insert("historyApiFallback".to_string(), json!(true));
        let fragment = Fragment::new().with_dev_server(DevServer {
            host: None,
            port: Some(3000),
            options,
        });
        let value = serde_json::to_value(&fragment).unwrap();
        assert_eq!(
            value["devServer"],
            json!({ "port": 3000, "historyApiFallback": true })
        );
    }
}
