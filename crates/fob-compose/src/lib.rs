//! Build descriptor composition for JavaScript bundlers.
//!
//! One invariant base description of what to build is specialized for
//! production, development or watch runs by folding an ordered list of
//! overlay fragments over it. The profile is picked from the lifecycle
//! signal of the invoking script.
//!
//! ```text
//! signal -> Profile -> [base, overlay_1, .., overlay_n] -> merge -> BuildDescriptor
//! ```
//!
//! The crate only describes the build. It reads no source files, writes
//! nothing and never runs the bundler.

pub mod base;
pub mod compose;
pub mod discovery;
pub mod error;
pub mod fragment;
pub mod merge;
pub mod overlays;
pub mod profile;
pub mod settings;

pub use base::build_base;
pub use compose::{compose, compose_profile};
pub use discovery::{ENV_PREFIX, SETTINGS_FILES, SettingsDiscovery};
pub use error::{ComposeError, Result, SettingsError};
pub use fragment::{
    AliasMap, DevServer, Enforce, EntryMap, Fragment, Loader, ModuleConfig, Output,
    PluginDescriptor, PluginKind, Resolve, Rule,
};
pub use merge::{BuildDescriptor, Merge, merge};
pub use overlays::{FragmentProducer, Overlay};
pub use profile::{Environment, LIFECYCLE_EVENT_VAR, LifecycleSignal, Profile};
pub use settings::{ProjectSettings, StyleSettings};
