use anyhow::Result;

use super::{CommandResult, CommandSummary, ConversionSummary, load_project};
use crate::cli::args::ConvertCommand;
use crate::cli::exit_status::ExitStatus;
use crate::convert::{CatalogJob, strings_to_catalogs};

pub fn to_po(cmd: ConvertCommand) -> Result<CommandResult> {
    let (root, loaded) = load_project(&cmd.common)?;

    let jobs: Vec<CatalogJob> = loaded
        .config
        .locales
        .iter()
        .map(|locale| CatalogJob {
            title: locale.title.clone(),
            strings_path: loaded.resolve(&locale.strings),
            catalog_path: loaded.resolve(&locale.catalog),
        })
        .collect();

    let written = strings_to_catalogs(&jobs)?;

    Ok(CommandResult {
        summary: CommandSummary::ToPo(ConversionSummary { root, written }),
        status: ExitStatus::Success,
    })
}
