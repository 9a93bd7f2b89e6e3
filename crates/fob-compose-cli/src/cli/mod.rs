//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `fob-compose compose` - Print the build descriptor for the current signal
//! - `fob-compose check` - Compose every profile and report failures
//! - `fob-compose profiles` - List profiles and their overlays
//! - `fob-compose schema` - Print the settings file JSON schema

mod commands;
pub mod enums;
mod tests;

use clap::Parser;

pub use commands::{CheckArgs, Command, ComposeArgs, ProfilesArgs, SettingsArgs};
pub use enums::*;

/// fob-compose - build descriptors from lifecycle signals
#[derive(Parser, Debug)]
#[command(
    name = "fob-compose",
    version,
    about = "Compose bundler build descriptors from lifecycle signals",
    long_about = "fob-compose picks a build profile from the running npm script\n\
                  (npm_lifecycle_event), folds the profile's overlays over the\n\
                  project's base configuration and prints the resulting descriptor."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows which profile was resolved and every overlay that was applied.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
