use anyhow::Result;
use colored::Colorize;

use super::super::args::ListCommand;
use super::super::exit_status::ExitStatus;
use super::helper::resolve_config;
use crate::loader::load_locales;

pub fn list(cmd: ListCommand) -> Result<ExitStatus> {
    let config = resolve_config(&cmd.common)?;
    let set = load_locales(&config.locales_root)?;

    if set.is_empty() {
        println!("No locale files found in {}", config.locales_root);
        return Ok(ExitStatus::Success);
    }

    for locale in set.values() {
        let primary = if locale.locale == config.primary_locale {
            " (primary)"
        } else {
            ""
        };
        println!(
            "{}{} - {} messages ({})",
            locale.locale.bold(),
            primary,
            locale.messages.leaf_count(),
            locale.file_path.display()
        );

        if cmd.common.verbose {
            for (key_path, message) in locale.messages.flatten() {
                println!("    {}: {}", key_path, message.kind());
            }
        }
    }

    Ok(ExitStatus::Success)
}
