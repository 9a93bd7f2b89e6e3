//! Profiles command implementation.

use std::io::Write;

use fob_compose::{Profile, ProjectSettings};

use crate::cli::ProfilesArgs;
use crate::commands::utils;
use crate::error::Result;

/// Execute the profiles command.
pub fn execute(args: ProfilesArgs) -> Result<()> {
    let settings = utils::load_settings(&args.settings)?;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", describe(&settings))?;
    stdout.flush()?;
    Ok(())
}

/// One block per profile: name, selecting signal, overlays in merge order.
pub fn describe(settings: &ProjectSettings) -> String {
    let mut out = String::new();
    for profile in Profile::ALL {
        let signal = profile.signal().unwrap_or("<any other>");
        out.push_str(&format!("{profile} (signal: {signal}, env: {})\n", profile.environment()));
        out.push_str("  base\n");
        for overlay in profile.overlays(settings) {
            out.push_str(&format!("  {overlay}\n"));
        }
    }
    out
}
