use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marker for what a plugin descriptor asks the bundler to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginKind {
    /// Remove a stale output directory before the build starts.
    Clean,
    /// Hoist listed modules out of the main bundle into a named chunk.
    SplitBundle,
    /// Minify emitted code and drop dead branches.
    Minify,
    /// Concatenate module scopes so unused exports can be eliminated.
    ConcatenateModules,
}

impl PluginKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginKind::Clean => "clean",
            PluginKind::SplitBundle => "split-bundle",
            PluginKind::Minify => "minify",
            PluginKind::ConcatenateModules => "concatenate-modules",
        }
    }
}

impl std::fmt::Display for PluginKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plugin the bundler should instantiate, in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub kind: PluginKind,

    /// Bundler-side plugin package name
    pub name: String,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl PluginDescriptor {
    pub fn new(kind: PluginKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}
