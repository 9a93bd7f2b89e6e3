//! Schema command implementation.

use std::io::Write;

use fob_compose::ProjectSettings;

use crate::error::Result;

/// Print the JSON schema of the settings file.
pub fn execute() -> Result<()> {
    let schema = serde_json::to_string_pretty(&ProjectSettings::json_schema())?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{schema}")?;
    Ok(())
}
