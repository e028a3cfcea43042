use crate::host::TemplateReader;
use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::PathBuf,
};

/// A directory of Markdown notes addressed by vault-relative paths.
///
/// Provides template reading and the storage half of a [`crate::FileStore`]; opening a
/// file is left to the front end, which knows how to show it to the user.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute location of a vault-relative path.
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    pub fn exists(&self, path: &str) -> io::Result<bool> {
        self.resolve(path).try_exists()
    }

    pub fn create_folder(&self, path: &str) -> io::Result<()> {
        fs::create_dir_all(self.resolve(path))
    }

    /// Creates a new file, failing with `AlreadyExists` rather than truncating one.
    pub fn create_file(&self, path: &str, content: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.resolve(path))?;
        file.write_all(content.as_bytes())
    }

    pub fn read(&self, path: &str) -> io::Result<String> {
        fs::read_to_string(self.resolve(path))
    }
}

impl TemplateReader for Vault {
    fn exists(&self, path: &str) -> io::Result<bool> {
        Vault::exists(self, path)
    }

    fn read(&self, path: &str) -> io::Result<String> {
        Vault::read(self, path)
    }
}
