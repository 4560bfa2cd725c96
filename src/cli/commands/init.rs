use std::{fs, path::Path};

use anyhow::Result;

use super::super::exit_status::ExitStatus;
use super::super::report::{print_failure, print_success};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        print_failure(&format!("{} already exists", CONFIG_FILE_NAME));
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, default_config_json()?)?;
    print_success(&format!("Created {}", CONFIG_FILE_NAME));

    Ok(ExitStatus::Success)
}
