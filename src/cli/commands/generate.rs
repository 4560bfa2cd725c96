use std::path::PathBuf;

use anyhow::Result;

use super::super::args::GenerateCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_success;
use super::helper::resolve_config;
use crate::loader::load_locales;
use crate::schema::typescript::{TypeDefOptions, render_type_defs, write_type_defs};

pub fn generate(cmd: GenerateCommand) -> Result<ExitStatus> {
    let config = resolve_config(&cmd.common)?;

    let output = cmd
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output));
    let options = TypeDefOptions {
        header: cmd.header || config.with_header,
        placeholder_args: cmd.placeholders || config.placeholder_args,
        primary_locale: config.primary_locale.clone(),
    };

    let set = load_locales(&config.locales_root)?;
    let content = render_type_defs(&set, &options);
    write_type_defs(&output, &content)?;

    if cmd.common.verbose {
        for locale in set.values() {
            println!(
                "  {} - {} messages ({})",
                locale.locale,
                locale.messages.leaf_count(),
                locale.file_path.display()
            );
        }
    }
    print_success(&format!(
        "Generated {} from {} locale(s)",
        output.display(),
        set.len()
    ));

    Ok(ExitStatus::Success)
}
