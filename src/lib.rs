//! Glossa - locale message loader and TypeScript definition generator
//!
//! Glossa is a CLI tool and library for loading per-locale JSON message files
//! from a directory and generating a TypeScript declaration file describing
//! their merged shape. It is not an i18n runtime: there is no pluralization,
//! interpolation, or locale fallback logic.
//!
//! Locale directories are flat: one `<locale>.json` file per locale.
//! Sub-directories are not recursed into.
//!
//! ## Module Structure
//!
//! - `cache`: Explicit, caller-owned caching for loaded locale sets
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `error`: Error types for loading and generation
//! - `loader`: Locale directory scanning and parsing
//! - `messages`: Message tree data model
//! - `schema`: Shape inference and TypeScript declaration output

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod messages;
pub mod schema;

pub use cache::LocaleCache;
pub use error::{Error, Result};
pub use loader::{load_locale_file, load_locales};
pub use messages::{LocaleMessages, LocaleSet, Message, MessageTree};
pub use schema::typescript::{TypeDefOptions, generate_type_defs, render_type_defs};
