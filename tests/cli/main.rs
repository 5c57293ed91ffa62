use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod init;
mod to_po;

const BIN_NAME: &str = "strpo";

pub const EN_STRINGS_PATH: &str = "iOSClient/Supporting Files/en.lproj/Localizable.strings";
pub const ZH_STRINGS_PATH: &str = "iOSClient/Supporting Files/zh-Hant-TW.lproj/Localizable.strings";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project laid out the way the default config expects, with an
    /// existing `locales/` directory.
    pub fn with_default_layout(en: &str, zh: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(EN_STRINGS_PATH, en)?;
        test.write_file(ZH_STRINGS_PATH, zh)?;
        fs::create_dir_all(test.root().join("locales"))?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn to_po_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("to-po");
        cmd
    }

    pub fn to_strings_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("to-strings");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
