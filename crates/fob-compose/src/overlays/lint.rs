//! Lint pass wiring.
//!
//! Not part of any built-in profile. Callers that want linting compose it
//! like any other overlay.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ComposeError, Result};
use crate::fragment::{Enforce, Fragment, Loader, Rule};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintOptions {
    /// Directories to lint. Empty lints everything the bundler sees.
    #[serde(default)]
    pub include: Vec<PathBuf>,

    #[serde(default)]
    pub exclude: Vec<String>,

    /// Passed to the linter untouched; must be an object when set
    #[serde(default)]
    pub options: Value,
}

/// Lint JavaScript sources before any other loader touches them.
pub fn lint(options: &LintOptions) -> Result<Fragment> {
    if !(options.options.is_null() || options.options.is_object()) {
        return Err(ComposeError::overlay(
            "lint",
            "linter options must be an object",
        ));
    }

    let mut rule = Rule::new(r"\.js$")
        .enforce(Enforce::Pre)
        .include(options.include.iter().cloned());
    for pattern in &options.exclude {
        rule = rule.exclude(pattern.clone());
    }
    let rule = rule.loader(Loader::new("eslint-loader").with_options(options.options.clone()));

    Ok(Fragment::new().with_rule(rule))
}
