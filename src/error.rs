//! Error types for locale loading and definition generation.
//!
//! Every failure aborts the enclosing call and names the offending path;
//! nothing is retried or silently skipped.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The locale directory does not exist or is not a directory.
    ///
    /// Distinct from an existing-but-empty directory, which loads
    /// successfully into an empty set.
    #[error("locale directory '{}' does not exist or is not a directory", path.display())]
    DirNotFound { path: PathBuf },

    /// A single-file load was pointed at something that is not a file.
    #[error("locale file '{}' does not exist or is not a file", path.display())]
    FileNotFound { path: PathBuf },

    /// A recognized locale file (or the directory itself) could not be read.
    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A recognized locale file is not valid JSON, or its root is not an
    /// object.
    #[error("failed to parse locale file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A locale file parsed as JSON but contains a value outside the
    /// message model (string, string array, or nested object).
    #[error("unsupported {found} value at key '{key}' in '{}'", path.display())]
    InvalidValue {
        path: PathBuf,
        key: String,
        found: &'static str,
    },

    /// The generated definition file could not be written.
    #[error("failed to write type definitions to '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The path this error is about.
    pub fn path(&self) -> &PathBuf {
        match self {
            Error::DirNotFound { path }
            | Error::FileNotFound { path }
            | Error::Read { path, .. }
            | Error::Parse { path, .. }
            | Error::InvalidValue { path, .. }
            | Error::Write { path, .. } => path,
        }
    }
}
