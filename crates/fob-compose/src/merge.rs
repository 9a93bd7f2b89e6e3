//! Merge engine: folds an ordered list of fragments into one descriptor.
//!
//! Rules, applied key by key from left (lowest precedence) to right:
//!
//! - list keys (`entry.*`, `module.rules`, `plugins`) concatenate in order
//! - map keys (`resolve.alias`, `env`, `devServer`) merge recursively and the
//!   later leaf wins on collision
//! - scalar keys (`context`, `output.path`, `output.publicPath`, `devtool`)
//!   take the later value when present; absence never clears
//!
//! The fold is associative but not commutative. Reordering the input can
//! change the result.

use std::ops::Deref;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::fragment::{DevServer, Fragment, ModuleConfig, Output, PluginKind, Resolve};

/// Fold a fragment that comes later in the sequence into `self`.
pub trait Merge {
    fn merge_from(&mut self, later: Self);
}

/// The fully merged descriptor handed to the bundler.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BuildDescriptor(Fragment);

impl BuildDescriptor {
    pub fn into_fragment(self) -> Fragment {
        self.0
    }

    pub fn has_plugin(&self, kind: PluginKind) -> bool {
        self.0.has_plugin(kind)
    }

    /// Render `env` into the bundler's define table.
    ///
    /// Each variable becomes a `process.env.<NAME>` key whose value is the
    /// JSON encoding of the variable, so string values arrive quoted.
    pub fn define_table(&self) -> IndexMap<String, String> {
        self.0
            .env
            .iter()
            .flatten()
            .map(|(name, value)| (format!("process.env.{name}"), value.to_string()))
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Deref for BuildDescriptor {
    type Target = Fragment;

    fn deref(&self) -> &Fragment {
        &self.0
    }
}

/// Merge fragments in the given order.
pub fn merge<I>(fragments: I) -> BuildDescriptor
where
    I: IntoIterator<Item = Fragment>,
{
    let mut merged = Fragment::default();
    for fragment in fragments {
        merged.merge_from(fragment);
    }
    BuildDescriptor(merged)
}

impl Merge for Fragment {
    fn merge_from(&mut self, later: Self) {
        let Fragment {
            context,
            entry,
            output,
            module,
            plugins,
            dev_server,
            devtool,
            resolve,
            env,
            dev_server_port,
        } = later;

        merge_scalar(&mut self.context, context);
        merge_nested(&mut self.entry, entry);
        merge_nested(&mut self.output, output);
        merge_nested(&mut self.module, module);
        merge_list(&mut self.plugins, plugins);
        merge_nested(&mut self.dev_server, dev_server);
        merge_scalar(&mut self.devtool, devtool);
        merge_nested(&mut self.resolve, resolve);
        merge_nested(&mut self.env, env);
        merge_scalar(&mut self.dev_server_port, dev_server_port);
    }
}

impl Merge for Output {
    fn merge_from(&mut self, later: Self) {
        merge_scalar(&mut self.path, later.path);
        merge_scalar(&mut self.public_path, later.public_path);
    }
}

impl Merge for ModuleConfig {
    fn merge_from(&mut self, later: Self) {
        self.rules.extend(later.rules);
    }
}

impl Merge for Resolve {
    fn merge_from(&mut self, later: Self) {
        // IndexMap::insert keeps the original slot for an existing key.
        self.alias.extend(later.alias);
    }
}

impl Merge for DevServer {
    fn merge_from(&mut self, later: Self) {
        merge_scalar(&mut self.host, later.host);
        merge_scalar(&mut self.port, later.port);
        self.options.merge_from(later.options);
    }
}

/// Entry map: lists of a shared bundle name concatenate.
impl Merge for IndexMap<String, Vec<String>> {
    fn merge_from(&mut self, later: Self) {
        for (name, modules) in later {
            self.entry(name).or_default().extend(modules);
        }
    }
}

/// Free-form bag: recursive deep merge.
impl Merge for IndexMap<String, Value> {
    fn merge_from(&mut self, later: Self) {
        for (key, value) in later {
            merge_values(self.entry(key).or_insert(Value::Null), &value);
        }
    }
}

fn merge_scalar<T>(slot: &mut Option<T>, later: Option<T>) {
    if later.is_some() {
        *slot = later;
    }
}

fn merge_list<T>(slot: &mut Option<Vec<T>>, later: Option<Vec<T>>) {
    match (slot.as_mut(), later) {
        (Some(items), Some(more)) => items.extend(more),
        (None, Some(more)) => *slot = Some(more),
        (_, None) => {}
    }
}

fn merge_nested<T: Merge>(slot: &mut Option<T>, later: Option<T>) {
    match (slot.as_mut(), later) {
        (Some(current), Some(more)) => current.merge_from(more),
        (None, Some(more)) => *slot = Some(more),
        (_, None) => {}
    }
}

/// Deep-merge `update` into `target`. Objects merge key by key; any other
/// value replaces what was there.
pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
