//! Composition entry point.

use tracing::{debug, info, info_span};

use crate::error::Result;
use crate::merge::{BuildDescriptor, merge};
use crate::overlays::FragmentProducer;
use crate::profile::Profile;
use crate::settings::ProjectSettings;

/// Resolve `signal` to a profile and compose its descriptor.
///
/// # Example
///
/// ```
/// use fob_compose::{PluginKind, ProjectSettings, compose};
///
/// let settings = ProjectSettings::with_root("/srv/site");
/// let descriptor = compose(Some("build:prod"), &settings).unwrap();
/// assert!(descriptor.has_plugin(PluginKind::Minify));
/// assert!(descriptor.dev_server.is_none());
/// ```
pub fn compose(signal: Option<&str>, settings: &ProjectSettings) -> Result<BuildDescriptor> {
    compose_profile(Profile::resolve(signal), settings)
}

/// Compose the descriptor for a known profile.
///
/// Merges `[base, overlay_1, .., overlay_n]` in the profile's declared order.
/// The first invalid input aborts composition.
pub fn compose_profile(profile: Profile, settings: &ProjectSettings) -> Result<BuildDescriptor> {
    let _span = info_span!("compose", profile = profile.name()).entered();

    let base = settings.base_fragment()?;
    let port = base.dev_server_port.unwrap_or(settings.dev_server_port);
    let overlays = profile.overlays_with_port(settings, port);
    let mut fragments = Vec::with_capacity(overlays.len() + 1);
    fragments.push(base);

    for overlay in &overlays {
        debug!(overlay = %overlay, "producing fragment");
        fragments.push(overlay.produce()?);
    }

    let descriptor = merge(fragments);
    info!(
        overlays = overlays.len(),
        plugins = descriptor.plugins().len(),
        rules = descriptor.rules().len(),
        "composed build descriptor"
    );
    Ok(descriptor)
}
