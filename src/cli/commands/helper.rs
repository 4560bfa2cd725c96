//! Config resolution shared by the CLI commands.

use std::env;

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::config::{Config, load_config};

/// Effective settings: the config file (or defaults) with the common CLI
/// flags applied on top. Command-specific flags are layered by each command.
pub fn resolve_config(common: &CommonArgs) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to resolve current directory.")?;
    let mut config = load_config(&cwd)?.config;

    if let Some(root) = &common.locales_root {
        config.locales_root = root.to_string_lossy().into_owned();
    }
    if let Some(primary) = &common.primary_locale {
        config.primary_locale = primary.clone();
    }

    Ok(config)
}
