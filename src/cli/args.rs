//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Glossa
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `generate`: Generate TypeScript definitions for the locale directory
//! - `list`: List loaded locales and their message counts
//! - `init`: Initialize glossa configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Locale directory path (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output path for the generated declaration (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit a machine-generated file header comment
    #[arg(long)]
    pub header: bool,

    /// Emit function types for messages with {placeholder} arguments
    #[arg(long)]
    pub placeholders: bool,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate TypeScript definitions for the locale directory
    Generate(GenerateCommand),
    /// List loaded locales and their message counts
    List(ListCommand),
    /// Initialize glossa configuration file
    Init,
}
