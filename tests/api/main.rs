use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tempfile::TempDir;

mod loader;

/// A throwaway project directory with a `locales/` sub-directory.
pub struct TestProject {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().canonicalize()?;
        fs::create_dir(root.join("locales"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    pub fn with_locale(locale: &str, content: &str) -> Result<Self> {
        let project = Self::new()?;
        project.write_locale(locale, content)?;
        Ok(project)
    }

    pub fn write_locale(&self, locale: &str, content: &str) -> Result<()> {
        self.write_file(&format!("locales/{}.json", locale), content)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.root.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn locales_dir(&self) -> PathBuf {
        self.root.join("locales")
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.root.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
