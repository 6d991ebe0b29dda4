//! Command handler modules for the bean counter CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum

mod cfg;
mod run;

pub use cfg::handle_cfg_command;
pub use run::{RunOptions, handle_run_command};
