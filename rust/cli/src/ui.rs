//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Usage banner shown when the arguments cannot be parsed.
pub fn write_usage(err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "Bean Counter CLI")?;
    writeln!(
        err,
        "Usage: beancounter run <SLOT_COUNT> <BEAN_COUNT> <luck|skill> [--debug]"
    )?;
    writeln!(err, "Example: beancounter run 10 400 luck")?;
    writeln!(err, "Example: beancounter run 20 1000 skill --debug")?;
    writeln!(err, "\nFor full help, run: beancounter --help")
}
