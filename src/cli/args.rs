//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `to-po`: Convert every `Localizable.strings` table to its `.po` catalog
//! - `to-strings`: Convert sync-back catalogs into their `Localizable.strings` tables
//! - `init`: Write a default `.strporc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::ToPo(cmd)) | Some(Command::ToStrings(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the conversion commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root used to find .strporc.json and resolve default paths
    /// (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ConvertCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert Localizable.strings tables to .po catalogs
    ToPo(ConvertCommand),
    /// Convert .po catalogs back to Localizable.strings tables
    ToStrings(ConvertCommand),
    /// Initialize a new .strporc.json configuration file
    Init,
}
