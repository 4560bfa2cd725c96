//! Main entry point for the glossa CLI.
//!
//! Dispatches to the appropriate command handler based on the parsed
//! arguments. Invoked without a command, prints help and exits successfully.

use anyhow::Result;
use clap::CommandFactory;

use super::args::{Arguments, Command};
use super::commands::{generate::generate, init::init, list::list};
use super::exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(command) = args.command else {
        Arguments::command().print_help().ok();
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Generate(cmd) => generate(cmd),
        Command::List(cmd) => list(cmd),
        Command::Init => init(),
    }
}
