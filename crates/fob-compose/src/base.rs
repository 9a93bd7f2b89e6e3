//! Base descriptor builder.
//!
//! Builds the invariant part of every descriptor: source context, entry
//! bundles, output location, public URL prefix and alias table. The
//! dev-server port rides along in the reserved slot for the dev-server
//! overlay.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tracing::debug;

use crate::error::{ComposeError, Result};
use crate::fragment::{AliasMap, EntryMap, Fragment, Output, Resolve};

/// Validate the fixed inputs and produce the base fragment.
///
/// # Errors
///
/// Returns [`ComposeError::InvalidBaseConfig`] when the entry map is empty or
/// has an empty bundle, when `context`/`output_path` are not absolute, when
/// an alias target is not an absolute path, or when the port is 0.
pub fn build_base(
    context: impl AsRef<Path>,
    entries: &EntryMap,
    output_path: impl AsRef<Path>,
    public_path: &str,
    aliases: &AliasMap,
    dev_server_port: u16,
) -> Result<Fragment> {
    let context = absolute("context", context.as_ref())?;
    let entry = validate_entries(entries)?;
    let output_path = absolute("output.path", output_path.as_ref())?;

    let mut alias = AliasMap::with_capacity(aliases.len());
    for (name, target) in aliases {
        if name.trim().is_empty() {
            return Err(ComposeError::base(
                "resolve.alias",
                "alias names cannot be empty",
            ));
        }
        let field = format!("resolve.alias.{name}");
        if target.as_os_str().is_empty() || !target.is_absolute() {
            return Err(ComposeError::base(
                field,
                format!("alias target '{}' is not resolvable", target.display()),
            ));
        }
        alias.insert(name.clone(), target.clean());
    }

    if dev_server_port == 0 {
        return Err(ComposeError::base(
            "devServerPort",
            "port must be a positive integer",
        ));
    }

    debug!(
        context = %context.display(),
        bundles = entry.len(),
        aliases = alias.len(),
        "built base fragment"
    );

    Ok(Fragment {
        context: Some(context),
        entry: Some(entry),
        output: Some(Output {
            path: Some(output_path),
            public_path: Some(public_path.to_string()),
        }),
        resolve: Some(Resolve { alias }),
        dev_server_port: Some(dev_server_port),
        ..Fragment::default()
    })
}

fn absolute(field: &str, path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ComposeError::base(field, "path cannot be empty"));
    }
    if !path.is_absolute() {
        return Err(ComposeError::base(
            field,
            format!("'{}' must be an absolute path", path.display()),
        ));
    }
    Ok(path.clean())
}

fn validate_entries(entries: &EntryMap) -> Result<EntryMap> {
    if entries.is_empty() {
        return Err(ComposeError::base(
            "entry",
            "at least one entry bundle is required",
        ));
    }

    for (name, modules) in entries {
        if name.trim().is_empty() {
            return Err(ComposeError::base("entry", "entry bundle names cannot be empty"));
        }
        if modules.is_empty() {
            return Err(ComposeError::base(
                format!("entry.{name}"),
                "entry bundle must list at least one module",
            ));
        }
        if modules.iter().any(|m| m.trim().is_empty()) {
            return Err(ComposeError::base(
                format!("entry.{name}"),
                "module paths cannot be empty",
            ));
        }
    }

    Ok(entries.clone())
}
