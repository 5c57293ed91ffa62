use anyhow::Result;

use super::{CommandResult, CommandSummary, ConversionSummary, load_project};
use crate::cli::args::ConvertCommand;
use crate::cli::exit_status::ExitStatus;
use crate::convert::catalog_to_strings;

pub fn to_strings(cmd: ConvertCommand) -> Result<CommandResult> {
    let (root, loaded) = load_project(&cmd.common)?;

    let mut written = Vec::new();
    for locale in loaded.config.locales.iter().filter(|l| l.sync_back) {
        written.push(catalog_to_strings(
            loaded.resolve(&locale.catalog),
            loaded.resolve(&locale.strings),
        )?);
    }

    if written.is_empty() {
        tracing::warn!("no locale has syncBack enabled, nothing to convert");
    }

    Ok(CommandResult {
        summary: CommandSummary::ToStrings(ConversionSummary { root, written }),
        status: ExitStatus::Success,
    })
}
