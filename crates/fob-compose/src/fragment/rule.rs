use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// When a rule runs relative to the normal loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
    Pre,
    Post,
}

/// One loader in a rule's chain. The bundler applies the chain last to first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loader {
    pub loader: String,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl Loader {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}

/// A module rule: which files it matches and the loaders they go through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Regular expression source matched against module paths
    pub test: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<PathBuf>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce: Option<Enforce>,

    #[serde(rename = "use")]
    pub loaders: Vec<Loader>,
}

impl Rule {
    pub fn new(test: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            include: Vec::new(),
            exclude: Vec::new(),
            enforce: None,
            loaders: Vec::new(),
        }
    }

    pub fn include(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.include.extend(dirs);
        self
    }

    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    pub fn enforce(mut self, enforce: Enforce) -> Self {
        self.enforce = Some(enforce);
        self
    }

    pub fn loader(mut self, loader: Loader) -> Self {
        self.loaders.push(loader);
        self
    }
}
