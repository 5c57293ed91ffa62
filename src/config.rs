use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".strporc.json";

const ENGLISH_STRINGS: &str = "iOSClient/Supporting Files/en.lproj/Localizable.strings";
const ZH_HANT_STRINGS: &str = "iOSClient/Supporting Files/zh-Hant-TW.lproj/Localizable.strings";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales")]
    pub locales: Vec<LocaleConfig>,
}

/// One language: its native table, its catalog, and the title written
/// into the catalog's `Language-Team` header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    pub title: String,
    pub strings: String,
    pub catalog: String,
    /// Convert the catalog back into the native table on `to-strings`.
    #[serde(default)]
    pub sync_back: bool,
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            title: "English".to_string(),
            strings: ENGLISH_STRINGS.to_string(),
            catalog: "locales/en.po".to_string(),
            sync_back: false,
        },
        LocaleConfig {
            title: "zh_Hant".to_string(),
            strings: ZH_HANT_STRINGS.to_string(),
            catalog: "locales/zh_Hant.po".to_string(),
            sync_back: true,
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales: default_locales(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Titles must be non-empty and unique, and no two locales may write the
    /// same catalog.
    pub fn validate(&self) -> Result<()> {
        let mut titles = HashSet::new();
        let mut catalogs = HashSet::new();

        for locale in &self.locales {
            if locale.title.trim().is_empty() {
                bail!("Locale title in 'locales' must not be empty");
            }
            if !titles.insert(locale.title.as_str()) {
                bail!("Duplicate locale title in 'locales': \"{}\"", locale.title);
            }
            if !catalogs.insert(locale.catalog.as_str()) {
                bail!("Duplicate catalog path in 'locales': \"{}\"", locale.catalog);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory that relative locale paths resolve against.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");

            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
