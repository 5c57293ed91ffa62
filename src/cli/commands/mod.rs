pub mod init;
pub mod to_po;
pub mod to_strings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::args::CommonArgs;
use super::exit_status::ExitStatus;
use crate::config::{ConfigLoadResult, load_config};
use crate::convert::WrittenFile;

#[derive(Debug)]
pub enum CommandSummary {
    ToPo(ConversionSummary),
    ToStrings(ConversionSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ConversionSummary {
    /// Project root, used to shorten reported paths.
    pub root: PathBuf,
    pub written: Vec<WrittenFile>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running strpo commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}

/// Resolve the project root and load the configuration found from it.
pub(crate) fn load_project(common: &CommonArgs) -> Result<(PathBuf, ConfigLoadResult)> {
    let root = match &common.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let root = canonical_root(&root)?;
    let loaded = load_config(&root)?;
    if !loaded.from_file {
        tracing::debug!(root = %root.display(), "no config file found, using defaults");
    }
    Ok((root, loaded))
}

fn canonical_root(root: &Path) -> Result<PathBuf> {
    root.canonicalize()
        .with_context(|| format!("Project root does not exist: {}", root.display()))
}
