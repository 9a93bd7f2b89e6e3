//! Compose command implementation.
//!
//! Resolves the profile for the lifecycle signal and writes the merged
//! descriptor to stdout.

use std::io::Write;

use fob_compose::{BuildDescriptor, LifecycleSignal, Profile, compose_profile};
use tracing::info;

use crate::cli::{ComposeArgs, OutputFormat};
use crate::commands::utils;
use crate::error::{CliError, Result};

/// Execute the compose command.
///
/// # Errors
///
/// Returns settings errors, the first composition error, or a write error
/// on stdout.
pub fn execute(args: ComposeArgs) -> Result<()> {
    let settings = utils::load_settings(&args.settings)?;
    let signal = match &args.signal {
        Some(signal) => LifecycleSignal::new(Some(signal.as_str())),
        None => LifecycleSignal::from_env(),
    };
    let signal = signal.as_deref().filter(|s| !s.is_empty());

    let profile = Profile::resolve(signal);
    info!(signal = signal.unwrap_or("<unset>"), %profile, "composing");
    let descriptor = compose_profile(profile, &settings)?;

    let rendered = render(&descriptor, &args)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    stdout.flush()?;
    Ok(())
}

/// Serialize the descriptor, or only its define table with `--define`.
pub fn render(descriptor: &BuildDescriptor, args: &ComposeArgs) -> Result<String> {
    if args.define {
        let table = descriptor.define_table();
        return match args.format {
            OutputFormat::Json if args.compact => Ok(serde_json::to_string(&table)?),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&table)?),
            OutputFormat::Toml => Ok(toml::to_string_pretty(&table)?),
        };
    }

    match args.format {
        OutputFormat::Json if args.compact => Ok(descriptor.to_json()?),
        OutputFormat::Json => Ok(descriptor.to_json_pretty()?),
        OutputFormat::Toml if args.compact => Err(CliError::InvalidArgument(
            "--compact only applies to --format json".to_string(),
        )),
        OutputFormat::Toml => Ok(toml::to_string_pretty(descriptor)?),
    }
}
