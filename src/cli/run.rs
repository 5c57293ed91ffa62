use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, to_po::to_po, to_strings::to_strings},
};

/// Dispatch to the handler for the parsed command.
///
/// Returns `Err` when a conversion fails (missing input, malformed
/// catalog, unwritable output, invalid config).
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::ToPo(cmd)) => to_po(cmd),
        Some(Command::ToStrings(cmd)) => to_strings(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
