//! Command implementations.
//!
//! - [`compose`] - Print the descriptor for a lifecycle signal
//! - [`check`] - Compose every profile
//! - [`profiles`] - List profiles and overlays
//! - [`schema`] - Print the settings schema
//!
//! Each module exposes an `execute` function taking its parsed arguments.

pub mod check;
pub mod compose;
pub mod profiles;
pub mod schema;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use compose::execute as compose_execute;
pub use profiles::execute as profiles_execute;
pub use schema::execute as schema_execute;
