//! Command-line front end for `fob-compose`.
//!
//! Resolves the lifecycle signal of the invoking script, loads project
//! settings and prints the composed build descriptor for the bundler to
//! consume.
//!
//! - [`cli`] - clap argument definitions
//! - `commands` - one module per subcommand
//! - [`error`] - CLI error type and miette rendering
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use fob_compose_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
