use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available fob-compose subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the build descriptor for a lifecycle signal
    ///
    /// The signal defaults to the npm_lifecycle_event variable, so running
    /// this from an npm script picks the matching profile. Unknown or absent
    /// signals select the default watch profile.
    Compose(ComposeArgs),

    /// Compose every profile and report which ones fail
    Check(CheckArgs),

    /// List profiles, the signal that selects each, and their overlays
    Profiles(ProfilesArgs),

    /// Print the JSON schema of the settings file
    Schema,
}

/// Where project settings come from
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Path to a settings file
    ///
    /// Relative paths are resolved against --root. Without this flag,
    /// fob-compose.toml then fob-compose.json are looked up in the root.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root every relative settings path is resolved against
    ///
    /// Defaults to the current directory.
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Arguments for the compose command
#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Lifecycle signal selecting the profile
    ///
    /// Falls back to the npm_lifecycle_event variable when omitted.
    ///
    /// Examples:
    ///   fob-compose compose --signal build:prod
    ///   npm_lifecycle_event=build:dev fob-compose compose
    #[arg(short, long, value_name = "SIGNAL")]
    pub signal: Option<String>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Output format for the descriptor
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Print only the define table built from the environment variables
    #[arg(long)]
    pub define: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Arguments for the profiles command
#[derive(Args, Debug)]
pub struct ProfilesArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}
