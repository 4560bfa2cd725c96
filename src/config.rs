use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".glossarc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing `<locale>.json` files.
    #[serde(default = "default_locales_root", alias = "localesDir")]
    pub locales_root: String,
    /// Path the generated TypeScript declaration is written to.
    #[serde(default = "default_output")]
    pub output: String,
    /// Locale whose values feed doc comments and placeholder detection.
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    /// Emit the machine-generated header comment.
    #[serde(default)]
    pub with_header: bool,
    /// Emit function types for messages with `{placeholder}` arguments.
    #[serde(default)]
    pub placeholder_args: bool,
}

fn default_locales_root() -> String {
    "./locales".to_string()
}

fn default_output() -> String {
    "./locales/messages.d.ts".to_string()
}

fn default_primary_locale() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            output: default_output(),
            primary_locale: default_primary_locale(),
            with_header: false,
            placeholder_args: false,
        }
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
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
