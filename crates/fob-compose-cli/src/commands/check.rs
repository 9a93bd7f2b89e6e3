//! Check command implementation.
//!
//! Composes every profile against the project settings without printing
//! descriptors, so a broken overlay surfaces before the build script runs.

use fob_compose::{Profile, compose_profile};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Errors
///
/// Returns settings errors, or [`CliError::CheckFailed`] when any profile
/// fails to compose.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking profiles...");

    if utils::uses_default_settings(&args.settings)? {
        ui::warning("No fob-compose.toml or fob-compose.json found, checking defaults");
    }
    let settings = utils::load_settings(&args.settings)?;

    let mut failed = 0;
    for profile in Profile::ALL {
        match compose_profile(profile, &settings) {
            Ok(descriptor) => ui::success(&format!(
                "{profile}: {} plugins, {} rules",
                descriptor.plugins().len(),
                descriptor.rules().len()
            )),
            Err(err) => {
                failed += 1;
                ui::error(&format!("{profile}: {err}"));
            }
        }
    }

    if failed > 0 {
        return Err(CliError::CheckFailed {
            failed,
            total: Profile::ALL.len(),
        });
    }

    ui::success("All profiles compose");
    Ok(())
}
