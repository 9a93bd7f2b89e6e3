//! fob-compose CLI entry point.
//!
//! Parses arguments, installs logging, dispatches the command and renders
//! any failure through miette.

use clap::Parser;
use fob_compose_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Compose(compose_args) => commands::compose_execute(compose_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Profiles(profiles_args) => commands::profiles_execute(profiles_args),
        cli::Command::Schema => commands::schema_execute(),
    };

    result.map_err(error::cli_error_to_miette)
}
